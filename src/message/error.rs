use std::{any::Any, io, result};

use thiserror::Error;

use crate::{message::MessageId, AnyBoxedError, AnyError};

/// The global `Result` alias of the module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the module.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build mime message for message {0}: missing sender address")]
    BuildMimeMessageMissingFromError(MessageId),
    #[error("cannot write mime message")]
    WriteMimeMessageError(#[source] io::Error),
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
