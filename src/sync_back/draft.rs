//! Draft action handlers: save, idempotent update (supersession) and
//! delete.

use tracing::{debug, info, warn};

use super::{Error, SyncBack};
use crate::{account::AccountId, folder::FolderRole, message::MessageId, AnyResult};

impl SyncBack {
    /// Save a draft to the account's drafts folder.
    ///
    /// `version` is the version counter the action was enqueued with.
    /// Accounts without a detected drafts folder are a logged no-op,
    /// as are messages that no longer exist locally, are not drafts
    /// anymore or have been edited since enqueue (all three race with
    /// local edits between enqueue and execution; the edit enqueues
    /// its own save for the newer version).
    pub async fn save_draft(
        &self,
        account_id: AccountId,
        message_id: MessageId,
        version: u64,
    ) -> AnyResult<()> {
        let account = self
            .store
            .account(account_id)
            .await?
            .ok_or(Error::GetAccountMissingError(account_id))?;

        let Some(message) = self.store.message(message_id).await? else {
            info!("tried to save nonexistent message {message_id} as draft, skipping");
            return Ok(());
        };
        if !message.is_draft {
            warn!("tried to save non-draft message {message_id} as draft, skipping");
            return Ok(());
        }
        if message.version != version {
            warn!("tried to save outdated version {version} of draft {message_id}, skipping");
            return Ok(());
        }

        info!(
            "saving draft for message {message_id} (version {})",
            message.version,
        );
        let mime = self.builder.build(&account, &message).await?;

        let mut session = self.pool.acquire(account_id).await?;
        let folders = session.folder_names().await?;
        let Some(drafts) = folders
            .get(&FolderRole::Drafts)
            .and_then(|names| names.first())
        else {
            info!("account {account_id} has no detected drafts folder, not saving draft");
            return Ok(());
        };

        session.select_folder(drafts).await?;
        session.save_draft(&mime).await?;

        Ok(())
    }

    /// Replace an old version of a draft with the current one.
    ///
    /// Two steps: create the new draft, unless a previous invocation
    /// already appended it (matched by Message-Id header, which is
    /// what makes the handler retry-safe), then delete the draft
    /// matching `old_message_id_header`. The deletion stops at the
    /// first match to bound the latency of the operation; duplicate
    /// stale drafts beyond the first are not cleaned up here.
    ///
    /// Same no-op guards as [`SyncBack::save_draft`], including the
    /// outdated `version` check.
    pub async fn update_draft(
        &self,
        account_id: AccountId,
        message_id: MessageId,
        version: u64,
        old_message_id_header: &str,
    ) -> AnyResult<()> {
        let account = self
            .store
            .account(account_id)
            .await?
            .ok_or(Error::GetAccountMissingError(account_id))?;

        let Some(message) = self.store.message(message_id).await? else {
            info!("tried to update nonexistent message {message_id} as draft, skipping");
            return Ok(());
        };
        if !message.is_draft {
            warn!("tried to update non-draft message {message_id} as draft, skipping");
            return Ok(());
        }
        if message.version != version {
            warn!("tried to save outdated version {version} of draft {message_id}, skipping");
            return Ok(());
        }

        info!(
            "updating draft for message {message_id} (version {})",
            message.version,
        );
        let message_id_header = message.message_id_header.clone();
        let mime = self.builder.build(&account, &message).await?;

        let mut session = self.pool.acquire(account_id).await?;
        let folders = session.folder_names().await?;
        let Some(drafts) = folders
            .get(&FolderRole::Drafts)
            .and_then(|names| names.first())
        else {
            info!("account {account_id} has no detected drafts folder, not saving draft");
            return Ok(());
        };

        session.select_folder(drafts).await?;

        let existing = session
            .find_by_header("Message-Id", &message_id_header)
            .await?;
        if existing.is_none() {
            session.save_draft(&mime).await?;
        } else {
            info!("draft {message_id_header} already saved, not creating a duplicate");
        }

        let old_version_deleted = session.delete_draft(old_message_id_header).await?;
        if old_version_deleted {
            info!("cleaned up old draft {old_message_id_header}");
        }

        Ok(())
    }

    /// Delete a draft from the account's drafts folder.
    ///
    /// `local_uid` is the engine-local identifier the draft was
    /// enqueued with; the remote lookup goes by Message-Id header.
    pub async fn delete_draft(
        &self,
        account_id: AccountId,
        local_uid: Option<&str>,
        message_id_header: &str,
    ) -> AnyResult<()> {
        info!("deleting draft {message_id_header}");
        if let Some(local_uid) = local_uid {
            debug!("draft local uid: {local_uid}");
        }

        let mut session = self.pool.acquire(account_id).await?;
        let folders = session.folder_names().await?;
        if !folders.contains_key(&FolderRole::Drafts) {
            info!("account {account_id} has no detected drafts folder, not deleting draft");
            return Ok(());
        }

        session.delete_draft(message_id_header).await?;

        Ok(())
    }
}
