//! Sent-message action handlers.
//!
//! Plain IMAP providers do not keep a copy of sent messages by
//! themselves: the engine appends one to the sent folder after
//! sending, and removes it again when the user deletes the sent
//! message locally.

use tracing::info;

use super::{Error, SyncBack};
use crate::{account::AccountId, folder::FolderRole, message::MessageId, AnyResult};

impl SyncBack {
    /// Append a copy of a sent message to the account's sent folder.
    ///
    /// A message row that disappeared since enqueue (the user deleted
    /// it locally right after sending) is a logged no-op, as is an
    /// account without a detected sent folder.
    pub async fn save_sent(&self, account_id: AccountId, message_id: MessageId) -> AnyResult<()> {
        let account = self
            .store
            .account(account_id)
            .await?
            .ok_or(Error::GetAccountMissingError(account_id))?;

        let Some(message) = self.store.message(message_id).await? else {
            info!("tried to save nonexistent message {message_id} as sent, skipping");
            return Ok(());
        };

        info!("saving sent message {message_id}");
        let mime = self.builder.build(&account, &message).await?;

        let mut session = self.pool.acquire(account_id).await?;
        let folders = session.folder_names().await?;
        let Some(sent) = folders
            .get(&FolderRole::Sent)
            .and_then(|names| names.first())
        else {
            info!("account {account_id} has no detected sent folder, not saving message");
            return Ok(());
        };

        session.select_folder(sent).await?;
        session.create_message(&mime).await?;

        Ok(())
    }

    /// Delete the sent message(s) matching the given Message-Id
    /// header.
    ///
    /// With `delete_multiple` unset the deletion stops at the first
    /// match, like draft deletion does.
    pub async fn delete_sent(
        &self,
        account_id: AccountId,
        message_id_header: &str,
        delete_multiple: bool,
    ) -> AnyResult<()> {
        info!("deleting sent message {message_id_header}");

        let mut session = self.pool.acquire(account_id).await?;
        let folders = session.folder_names().await?;
        if !folders.contains_key(&FolderRole::Sent) {
            info!("account {account_id} has no detected sent folder, not deleting message");
            return Ok(());
        }

        session
            .delete_sent_message(message_id_header, delete_multiple)
            .await?;

        Ok(())
    }
}
