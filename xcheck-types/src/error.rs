//! Error types for parsing identifiers and operation kinds.

use thiserror::Error;

/// Errors raised while interpreting names from configuration or corpora.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Name does not match any known operation kind.
    #[error("Unknown operation kind: {0}")]
    UnknownOperationKind(String),

    /// Name does not match any known algorithm identifier.
    #[error("Unknown {kind} identifier: {name}")]
    UnknownIdentifier {
        /// Identifier family (`cipher`, `digest`, ...).
        kind: &'static str,
        /// The rejected name.
        name: String,
    },
}

/// Result type alias for type-level parsing.
pub type Result<T> = std::result::Result<T, TypeError>;
