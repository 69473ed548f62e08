use std::{any::Any, error, result};

/// The global any `Result` alias of the library.
///
/// Used by every collaborator trait ([`Storage`](crate::store::Storage),
/// [`ImapSession`](crate::imap::ImapSession), ...) where the concrete
/// error type is not known at compilation time.
pub type AnyResult<T> = result::Result<T, AnyBoxedError>;

/// The global, downcastable any `Error` trait of the library.
///
/// Collaborator traits need to be object-safe, so their methods
/// cannot carry a generic error parameter. They return this boxed,
/// downcastable error instead: implementors wrap their own error
/// types, and callers that care about a specific condition can
/// downcast via [`AnyError::as_any`].
pub trait AnyError: error::Error + Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// The global any boxed `Error` alias of the library.
pub type AnyBoxedError = Box<dyn AnyError + Send + 'static>;

impl error::Error for AnyBoxedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.as_ref().source()
    }
}
