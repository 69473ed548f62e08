//! # IMAP module
//!
//! Module dedicated to the IMAP connection session contract.
//!
//! The session is external to this crate: engines bring their own
//! protocol client and expose it through [`ImapSession`]. The
//! [`SessionPool`] hands out at most one writable session per account
//! at a time, reflecting the single-command-in-flight constraint of
//! an IMAP connection. [`pool::SharedSessionPool`] is a stock pool
//! for the common case of one long-lived session per account.

mod error;
pub mod pool;

use std::collections::BTreeMap;

use async_trait::async_trait;

#[doc(inline)]
pub use self::{
    error::{Error, Result},
    pool::SharedSessionPool,
};
use crate::{account::AccountId, flag::Flag, folder::FolderRole, uid::Uid, AnyResult};

/// The outcome of a remote folder deletion.
///
/// Deleting a folder that is already gone is not a protocol failure
/// for this layer: the session reports it as a distinct, ignorable
/// outcome and the caller treats it as success. Any other protocol
/// condition is a plain `Err`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FolderDeletion {
    /// The remote folder existed and has been deleted.
    Deleted,

    /// The remote folder was already absent.
    AlreadyAbsent,
}

/// A writable, account-scoped IMAP session.
///
/// All folder arguments are provider-native paths: display-name
/// translation happens in the caller, UTF-7 encoding and any other
/// wire concern happen in the implementation.
///
/// Implementations own reconnection, backoff, timeouts and
/// authentication refresh; a method returning `Err` means the
/// operation failed for good and the whole action should be retried
/// by the queue.
#[async_trait]
pub trait ImapSession: Send {
    /// Select the given folder, checking its UID validity.
    ///
    /// If the folder reports a new validity epoch, the implementation
    /// must discard every UID assumption it holds for that folder
    /// before returning.
    async fn select_folder(&mut self, folder: &str) -> AnyResult<()>;

    /// Add the given flags to the given UIDs of the selected folder.
    async fn add_flags(&mut self, uids: &[Uid], flags: &[Flag]) -> AnyResult<()>;

    /// Remove the given flags from the given UIDs of the selected
    /// folder.
    async fn remove_flags(&mut self, uids: &[Uid], flags: &[Flag]) -> AnyResult<()>;

    /// Copy the given UIDs of the selected folder to the given
    /// destination folder.
    async fn copy(&mut self, uids: &[Uid], to_folder: &str) -> AnyResult<()>;

    /// Delete the given UIDs from the selected folder.
    async fn delete_uids(&mut self, uids: &[Uid]) -> AnyResult<()>;

    /// Create the given folder.
    async fn create_folder(&mut self, folder: &str) -> AnyResult<()>;

    /// Rename the given folder.
    async fn rename_folder(&mut self, from_folder: &str, to_folder: &str) -> AnyResult<()>;

    /// Delete the given folder.
    ///
    /// An already-absent folder is reported as
    /// [`FolderDeletion::AlreadyAbsent`], not as an error.
    async fn delete_folder(&mut self, folder: &str) -> AnyResult<FolderDeletion>;

    /// List the native names of the special folders of the account,
    /// by role.
    ///
    /// Roles are optional: an account without a drafts or sent folder
    /// simply has no entry for that role.
    async fn folder_names(&mut self) -> AnyResult<BTreeMap<FolderRole, Vec<String>>>;

    /// The hierarchy separator advertised by the provider.
    fn folder_separator(&self) -> char;

    /// The namespace prefix advertised by the provider, empty when
    /// none.
    fn folder_prefix(&self) -> String;

    /// Search the selected folder for a message carrying the given
    /// header value. Returns the first matching UID.
    async fn find_by_header(&mut self, header: &str, value: &str) -> AnyResult<Option<Uid>>;

    /// Append the given MIME bytes to the drafts folder, flagged as
    /// draft.
    async fn save_draft(&mut self, mime: &[u8]) -> AnyResult<()>;

    /// Append the given MIME bytes to the selected folder.
    async fn create_message(&mut self, mime: &[u8]) -> AnyResult<()>;

    /// Delete the draft whose Message-Id header matches the given
    /// value.
    ///
    /// The Message-Id header is the only remote-side identifier for
    /// drafts: engine-local identifiers never reach the wire, so the
    /// header value is required here and accepted upstream for
    /// logging only.
    ///
    /// Contract: deletes the FIRST match only, to bound the latency
    /// of the search. Duplicate stale drafts beyond the first are
    /// left in place. Returns whether a draft was found.
    async fn delete_draft(&mut self, message_id_header: &str) -> AnyResult<bool>;

    /// Delete the sent message(s) whose Message-Id header matches the
    /// given value.
    ///
    /// With `delete_multiple` unset, stops at the first match like
    /// [`ImapSession::delete_draft`]; otherwise deletes every match.
    /// Returns whether at least one message was found.
    async fn delete_sent_message(
        &mut self,
        message_id_header: &str,
        delete_multiple: bool,
    ) -> AnyResult<bool>;
}

/// The pool of writable IMAP sessions, one per account.
///
/// Acquisition blocks until the account's session is free; the
/// returned box is exclusive and releases the session when dropped,
/// on every exit path of the calling handler. Different accounts
/// proceed in parallel.
#[async_trait]
pub trait SessionPool: Send + Sync {
    /// Acquire the writable session of the given account.
    async fn acquire(&self, account_id: AccountId) -> AnyResult<Box<dyn ImapSession>>;
}
