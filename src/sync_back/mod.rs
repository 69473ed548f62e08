//! # Sync back module
//!
//! Module dedicated to the remote action executor.
//!
//! [`SyncBack`] replays local datastore changes on the remote
//! mailbox, one action at a time. Actions are driven by the engine's
//! retry queue under at-least-once delivery, so every handler here is
//! idempotent: re-invoking it with identical arguments converges to
//! the same remote state.
//!
//! Handlers never update the local flag or UID caches after a remote
//! mutation succeeds; a separate sync pass picks the new state up.
//! The only local writes performed here are the folder-name
//! write-back after a create/rename and the category row removal
//! after a folder delete.
//!
//! Every handler follows the same shape: short scoped datastore
//! read, remote addressing resolution, session acquisition, protocol
//! mutations, then (for folder actions) a short scoped write. A
//! defined set of input states ("no remote UIDs", "no drafts
//! folder", "message row gone") are logged no-ops; anything else
//! that fails propagates to the caller, which is expected to retry.
//! Multi-step handlers are not transactional: a failure partway
//! leaves the already-applied sub-steps in place until the retry.

mod draft;
mod error;
mod folder;
mod sent;

use std::{slice, sync::Arc};

use tracing::{info, warn};

#[doc(inline)]
pub use self::error::{Error, Result};
use crate::{
    account::AccountId,
    flag::Flag,
    imap::SessionPool,
    message::{BuildMimeMessage, MessageId},
    store::Storage,
    uid, AnyResult,
};

/// The remote action executor.
///
/// Holds the injected collaborators and exposes one handler per
/// action kind. Cheap to clone.
#[derive(Clone)]
pub struct SyncBack {
    pub(crate) store: Arc<dyn Storage>,
    pub(crate) pool: Arc<dyn SessionPool>,
    pub(crate) builder: Arc<dyn BuildMimeMessage>,
}

impl SyncBack {
    pub fn new(
        store: Arc<dyn Storage>,
        pool: Arc<dyn SessionPool>,
        builder: Arc<dyn BuildMimeMessage>,
    ) -> Self {
        Self {
            store,
            pool,
            builder,
        }
    }

    /// Star or unstar a message on the remote mailbox.
    pub async fn set_starred(
        &self,
        account_id: AccountId,
        message_id: MessageId,
        starred: bool,
    ) -> AnyResult<()> {
        self.set_flag(account_id, message_id, Flag::Flagged, starred)
            .await
    }

    /// Mark a message read or unread on the remote mailbox.
    pub async fn set_unread(
        &self,
        account_id: AccountId,
        message_id: MessageId,
        unread: bool,
    ) -> AnyResult<()> {
        self.set_flag(account_id, message_id, Flag::Seen, !unread)
            .await
    }

    /// Add or remove a flag on every remote occurrence of a message.
    ///
    /// Adding an already-present flag and removing an already-absent
    /// one are no-ops on the IMAP side, which is what makes this
    /// handler safe to retry.
    pub async fn set_flag(
        &self,
        account_id: AccountId,
        message_id: MessageId,
        flag: Flag,
        is_add: bool,
    ) -> AnyResult<()> {
        let action = if is_add { "adding" } else { "removing" };
        info!("{action} flag {flag} on message {message_id}");

        let uids = uid::resolve(self.store.as_ref(), message_id).await?;
        if uids.is_empty() {
            warn!("no remote uids found for message {message_id}, skipping flag change");
            return Ok(());
        }

        let mut session = self.pool.acquire(account_id).await?;
        for (folder, folder_uids) in uids.iter() {
            session.select_folder(folder).await?;
            if is_add {
                session
                    .add_flags(folder_uids, slice::from_ref(&flag))
                    .await?;
            } else {
                session
                    .remove_flags(folder_uids, slice::from_ref(&flag))
                    .await?;
            }
        }

        Ok(())
    }

    /// Move every remote occurrence of a message to the given folder.
    ///
    /// IMAP has no atomic move, so each source folder is processed as
    /// copy-then-delete. A message present in several source folders
    /// lands in the destination once per occurrence; occurrences are
    /// not deduplicated.
    pub async fn move_message(
        &self,
        account_id: AccountId,
        message_id: MessageId,
        to_folder: &str,
    ) -> AnyResult<()> {
        info!("moving message {message_id} to folder {to_folder}");

        let uids = uid::resolve(self.store.as_ref(), message_id).await?;
        if uids.is_empty() {
            warn!("no remote uids found for message {message_id}, skipping move");
            return Ok(());
        }

        let mut session = self.pool.acquire(account_id).await?;
        for (folder, folder_uids) in uids.iter() {
            session.select_folder(folder).await?;
            session.copy(folder_uids, to_folder).await?;
            session.delete_uids(folder_uids).await?;
        }

        Ok(())
    }
}
