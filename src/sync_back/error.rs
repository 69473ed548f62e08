use std::{any::Any, result};

use thiserror::Error;

use crate::{account::AccountId, folder::CategoryId, AnyBoxedError, AnyError};

/// The global `Result` alias of the module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the module.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot get account {0}: account does not exist")]
    GetAccountMissingError(AccountId),
    #[error("cannot get category {0}: category does not exist")]
    GetCategoryMissingError(CategoryId),
}

impl AnyError for Error {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<Error> for AnyBoxedError {
    fn from(err: Error) -> Self {
        Box::new(err)
    }
}
