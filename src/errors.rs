//! Provides the error type returned when setting up or advancing a traversal.

use thiserror::Error;

/// The error type of this crate. `E` is the error type of a fallible children
/// accessor; infallible traversals use [std::convert::Infallible].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TraversalError<E> {
    /// A required argument was not supplied. Raised before any element is produced.
    #[error("Invalid argument: `{0}` must be supplied")]
    InvalidArgument(&'static str),
    /// Failure raised by the caller-supplied children accessor, passed through unchanged
    #[error("Children accessor failed")]
    Children(#[source] E),
}

impl<E> TraversalError<E> {
    /// Returns the wrapped accessor error, if any
    pub fn into_inner(self) -> Option<E> {
        match self {
            TraversalError::Children(err) => Some(err),
            TraversalError::InvalidArgument(_) => None,
        }
    }
}
