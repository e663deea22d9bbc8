//! Application error types

use reqcheck_domain::DomainError;
use thiserror::Error;

use crate::variable_resolver::ResolveError;

/// Reasons a send is refused before anything goes on the network.
///
/// Catalog, store and history are untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The template has no URL.
    #[error("URL is required!")]
    EmptyUrl,

    /// A placeholder names an unknown variable.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The selected catalog entry does not exist.
    #[error(transparent)]
    Catalog(#[from] DomainError),
}

impl SendError {
    /// The undefined variable name, if that is why the send was refused.
    #[must_use]
    pub fn undefined_variable(&self) -> Option<&str> {
        match self {
            Self::Resolve(ResolveError::UndefinedVariable(name)) => Some(name),
            _ => None,
        }
    }
}

/// Result type alias for send preparation.
pub type SendResult<T> = Result<T, SendError>;
