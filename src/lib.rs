//! Rust library to propagate local mailbox changes to remote IMAP
//! mailboxes.
//!
//! A mail sync engine keeps a local datastore that users mutate
//! freely: they star messages, move them across folders, rename
//! folders, edit drafts. This library is the write-back boundary of
//! such an engine: it converts one local change at a time into the
//! IMAP commands that replay it on the remote mailbox, absorbing
//! provider quirks (folder naming conventions, missing special
//! folders, already-deleted remote state) along the way.
//!
//! The entry surface is [`SyncBack`](crate::sync_back::SyncBack),
//! a set of idempotent action handlers designed to be driven by an
//! at-least-once retry queue. Everything it talks to is injected as a
//! trait object:
//!
//! - [`Storage`](crate::store::Storage): short, scoped transactions
//!   against the engine's datastore;
//! - [`SessionPool`](crate::imap::SessionPool) and
//!   [`ImapSession`](crate::imap::ImapSession): the pooled,
//!   per-account exclusive IMAP session;
//! - [`BuildMimeMessage`](crate::message::BuildMimeMessage): the MIME
//!   builder turning a [`Message`](crate::message::Message) into its
//!   wire representation.
//!
//! Handlers never update local flag or UID caches after a remote
//! mutation succeeds: reconciliation is the job of a separate sync
//! pass that observes the remote state.

pub mod account;
mod error;
pub mod flag;
pub mod folder;
pub mod imap;
pub mod message;
pub mod store;
pub mod sync_back;
pub mod uid;

#[doc(inline)]
pub use self::{
    account::{Account, AccountId, Provider},
    error::{AnyBoxedError, AnyError, AnyResult},
    flag::Flag,
    folder::{Category, CategoryId, FolderRole},
    imap::{FolderDeletion, ImapSession, SessionPool},
    message::{Message, MessageId},
    store::Storage,
    sync_back::SyncBack,
    uid::{Uid, UidMap},
};
