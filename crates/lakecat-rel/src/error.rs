use std::{error::Error as StdError, fmt};
use thiserror::Error as ThisError;

///
/// CatalogError
///
/// Structured error with a stable kind classification.
///
/// `Validation` and the `Unsupported*` kinds are caller or schema-version
/// faults and must never be retried. `Operational` wraps a transport-level
/// cause; retry policy belongs to the caller, not this layer.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct CatalogError {
    pub kind: ErrorKind,
    pub message: String,

    /// Underlying cause, kept for diagnostics on propagated store failures.
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl CatalogError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause to an error under construction.
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Construct a validation error (caller fault, no retry).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Construct an unsupported-variant error (programming or version skew).
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    /// Construct an error for an operation the codec deliberately refuses.
    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedOperation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    /// Construct an operational failure wrapping a transport-level cause.
    pub fn operational(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Operational, message)
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }

    /// Only operational failures are transient; everything else is a bug or
    /// a caller error.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::Operational)
    }

    #[must_use]
    pub fn display_with_kind(&self) -> String {
        format!("{}: {}", self.kind, self.message)
    }
}

///
/// ErrorKind
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    Operational,
    Unsupported,
    UnsupportedOperation,
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AlreadyExists => "already_exists",
            Self::NotFound => "not_found",
            Self::Operational => "operational",
            Self::Unsupported => "unsupported",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::Validation => "validation",
        };
        write!(f, "{label}")
    }
}
