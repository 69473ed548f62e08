//! # Session pool module
//!
//! Module dedicated to the stock IMAP session pool.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use super::{Error, FolderDeletion, ImapSession, SessionPool};
use crate::{account::AccountId, flag::Flag, folder::FolderRole, uid::Uid, AnyResult};

/// A stock [`SessionPool`] holding one long-lived session per
/// account behind a mutex.
///
/// [`SharedSessionPool::acquire`] blocks until the account's session
/// is free and hands out an exclusive handle that releases the lock
/// on drop. Acquiring a session for an account that was never
/// registered is an error: sessions are established by the engine's
/// connection layer, not here.
#[derive(Default)]
pub struct SharedSessionPool {
    sessions: BTreeMap<AccountId, Arc<Mutex<Box<dyn ImapSession>>>>,
}

impl SharedSessionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the writable session of the given account, replacing
    /// any previous one.
    pub fn register(&mut self, account_id: AccountId, session: Box<dyn ImapSession>) {
        self.sessions
            .insert(account_id, Arc::new(Mutex::new(session)));
    }
}

#[async_trait]
impl SessionPool for SharedSessionPool {
    async fn acquire(&self, account_id: AccountId) -> AnyResult<Box<dyn ImapSession>> {
        let session = self
            .sessions
            .get(&account_id)
            .ok_or(Error::AcquireSessionMissingAccountError(account_id))?
            .clone();

        debug!("acquiring imap session for account {account_id}");
        let guard = session.lock_owned().await;

        Ok(Box::new(SharedSession { guard }))
    }
}

/// An exclusive handle on a pooled session. Dropping it releases the
/// account's session back to the pool.
struct SharedSession {
    guard: OwnedMutexGuard<Box<dyn ImapSession>>,
}

#[async_trait]
impl ImapSession for SharedSession {
    async fn select_folder(&mut self, folder: &str) -> AnyResult<()> {
        self.guard.select_folder(folder).await
    }

    async fn add_flags(&mut self, uids: &[Uid], flags: &[Flag]) -> AnyResult<()> {
        self.guard.add_flags(uids, flags).await
    }

    async fn remove_flags(&mut self, uids: &[Uid], flags: &[Flag]) -> AnyResult<()> {
        self.guard.remove_flags(uids, flags).await
    }

    async fn copy(&mut self, uids: &[Uid], to_folder: &str) -> AnyResult<()> {
        self.guard.copy(uids, to_folder).await
    }

    async fn delete_uids(&mut self, uids: &[Uid]) -> AnyResult<()> {
        self.guard.delete_uids(uids).await
    }

    async fn create_folder(&mut self, folder: &str) -> AnyResult<()> {
        self.guard.create_folder(folder).await
    }

    async fn rename_folder(&mut self, from_folder: &str, to_folder: &str) -> AnyResult<()> {
        self.guard.rename_folder(from_folder, to_folder).await
    }

    async fn delete_folder(&mut self, folder: &str) -> AnyResult<FolderDeletion> {
        self.guard.delete_folder(folder).await
    }

    async fn folder_names(&mut self) -> AnyResult<BTreeMap<FolderRole, Vec<String>>> {
        self.guard.folder_names().await
    }

    fn folder_separator(&self) -> char {
        self.guard.folder_separator()
    }

    fn folder_prefix(&self) -> String {
        self.guard.folder_prefix()
    }

    async fn find_by_header(&mut self, header: &str, value: &str) -> AnyResult<Option<Uid>> {
        self.guard.find_by_header(header, value).await
    }

    async fn save_draft(&mut self, mime: &[u8]) -> AnyResult<()> {
        self.guard.save_draft(mime).await
    }

    async fn create_message(&mut self, mime: &[u8]) -> AnyResult<()> {
        self.guard.create_message(mime).await
    }

    async fn delete_draft(&mut self, message_id_header: &str) -> AnyResult<bool> {
        self.guard.delete_draft(message_id_header).await
    }

    async fn delete_sent_message(
        &mut self,
        message_id_header: &str,
        delete_multiple: bool,
    ) -> AnyResult<bool> {
        self.guard
            .delete_sent_message(message_id_header, delete_multiple)
            .await
    }
}
