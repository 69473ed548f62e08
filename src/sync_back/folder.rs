//! Folder action handlers: remote create, rename and delete.

use tracing::{debug, info};

use super::{Error, SyncBack};
use crate::{
    account::{Account, AccountId},
    folder::{path::imap_folder_path, Category, CategoryId},
    imap::{FolderDeletion, ImapSession},
    AnyResult,
};

impl SyncBack {
    /// Create the remote folder of a category.
    ///
    /// Some providers have their own conventions regarding folder
    /// paths: Fastmail for instance wants `INBOX.A` for the local
    /// name `A`. The display name is translated accordingly and, when
    /// the translated path differs, written back onto the category so
    /// subsequent actions address the right remote folder.
    pub async fn create_folder(
        &self,
        account_id: AccountId,
        category_id: CategoryId,
    ) -> AnyResult<()> {
        info!("creating remote folder for category {category_id}");

        let (account, category) = self.folder_context(account_id, category_id).await?;

        let mut session = self.pool.acquire(account_id).await?;
        let new_display_name = native_folder_name(&account, &category.display_name, &*session);
        session.create_folder(&new_display_name).await?;
        drop(session);

        if new_display_name != category.display_name {
            debug!("translated folder name to {new_display_name}, writing it back");
            self.store
                .set_category_display_name(category_id, &new_display_name)
                .await?;
        }

        Ok(())
    }

    /// Rename the remote folder of a category.
    ///
    /// `old_name` is the current provider-native path of the folder;
    /// the new name comes from the category's display name, which the
    /// engine has already updated locally. Same translation and
    /// write-back rules as [`SyncBack::create_folder`].
    pub async fn update_folder(
        &self,
        account_id: AccountId,
        category_id: CategoryId,
        old_name: &str,
    ) -> AnyResult<()> {
        info!("renaming remote folder {old_name} for category {category_id}");

        let (account, category) = self.folder_context(account_id, category_id).await?;

        let mut session = self.pool.acquire(account_id).await?;
        let new_display_name = native_folder_name(&account, &category.display_name, &*session);
        session.rename_folder(old_name, &new_display_name).await?;
        drop(session);

        if new_display_name != category.display_name {
            debug!("translated folder name to {new_display_name}, writing it back");
            self.store
                .set_category_display_name(category_id, &new_display_name)
                .await?;
        }

        Ok(())
    }

    /// Delete the remote folder of a category, then the category row
    /// itself.
    ///
    /// A folder already absent on the remote side is treated as
    /// success, which makes the handler idempotent: the retry that
    /// follows a crash between the remote and the local delete still
    /// removes the category row. Any other protocol failure
    /// propagates before the local delete, leaving local and remote
    /// state divergent until the action is retried.
    pub async fn delete_folder(
        &self,
        account_id: AccountId,
        category_id: CategoryId,
    ) -> AnyResult<()> {
        info!("deleting remote folder for category {category_id}");

        let (account, category) = self.folder_context(account_id, category_id).await?;

        let mut session = self.pool.acquire(account_id).await?;
        let folder = native_folder_name(&account, &category.display_name, &*session);
        match session.delete_folder(&folder).await? {
            FolderDeletion::Deleted => (),
            FolderDeletion::AlreadyAbsent => {
                debug!("remote folder {folder} already absent, treating delete as success");
            }
        }
        drop(session);

        self.store.delete_category(category_id).await?;

        Ok(())
    }

    /// The pre-network scoped read shared by the folder handlers.
    async fn folder_context(
        &self,
        account_id: AccountId,
        category_id: CategoryId,
    ) -> AnyResult<(Account, Category)> {
        let account = self
            .store
            .account(account_id)
            .await?
            .ok_or(Error::GetAccountMissingError(account_id))?;
        let category = self
            .store
            .category(category_id)
            .await?
            .ok_or(Error::GetCategoryMissingError(category_id))?;
        Ok((account, category))
    }
}

/// Translates a display name to the provider-native folder path,
/// using the separator and prefix advertised by the session.
///
/// Virtual-namespace providers keep the display name as-is.
fn native_folder_name(account: &Account, display_name: &str, session: &dyn ImapSession) -> String {
    if account.provider.uses_virtual_folder_namespace() {
        display_name.to_owned()
    } else {
        imap_folder_path(
            display_name,
            session.folder_separator(),
            &session.folder_prefix(),
        )
    }
}
