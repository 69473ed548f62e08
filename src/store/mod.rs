//! # Store module
//!
//! Module dedicated to the engine datastore contract.

use async_trait::async_trait;

use crate::{
    account::{Account, AccountId},
    folder::{Category, CategoryId},
    message::{Message, MessageId},
    uid::UidMap,
    AnyResult,
};

/// The engine datastore, accessed through short scoped transactions.
///
/// Every method is one transaction: read methods commit nothing,
/// write methods commit on success and roll back otherwise. Action
/// handlers call into this trait strictly before or after the network
/// segment, never around it, so slow remote I/O can never hold a
/// database lock.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read an account row.
    async fn account(&self, id: AccountId) -> AnyResult<Option<Account>>;

    /// Read a category (folder) row.
    async fn category(&self, id: CategoryId) -> AnyResult<Option<Category>>;

    /// Read a message row.
    async fn message(&self, id: MessageId) -> AnyResult<Option<Message>>;

    /// Read the remote UID mappings of a message, grouped by folder
    /// native name.
    ///
    /// Returns an empty map, not an error, when the message has no
    /// remote presence.
    async fn uids_by_folder(&self, id: MessageId) -> AnyResult<UidMap>;

    /// Rewrite the display name of a category.
    ///
    /// Called after a remote create or rename when the provider-native
    /// path differs from the requested display name.
    async fn set_category_display_name(&self, id: CategoryId, name: &str) -> AnyResult<()>;

    /// Delete a category row.
    ///
    /// Called only after the remote folder has been deleted (or found
    /// already absent).
    async fn delete_category(&self, id: CategoryId) -> AnyResult<()>;
}
