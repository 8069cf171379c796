#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Invariant violations as values.
//!
//! The predicates in this crate describe what went wrong with an
//! [`InvariantViolation`]; the dispatch surface never hands one back to its
//! caller, it passes it to [`crate::abort::report`] instead.

use thiserror::Error;

/// A backend-independent property that did not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A KDF produced a key whose length differs from the requested size.
    #[error("{operation}: invalid keySize (requested {requested}, got {actual})")]
    InvalidKeySize {
        /// Operation name, e.g. `KDF_PBKDF2`.
        operation: &'static str,
        /// Requested key size in bytes.
        requested: usize,
        /// Length of the produced key in bytes.
        actual: usize,
    },

    /// ChaCha20-Poly1305 encryption succeeded with an IV longer than 12 bytes.
    #[error("{operation}: CHACHA20_POLY1305 IV of {iv_len} bytes accepted (CVE-2019-1543)")]
    ChaCha20Poly1305IvTooLong {
        /// Operation name.
        operation: &'static str,
        /// Length of the IV supplied in the descriptor.
        iv_len: usize,
    },
}

impl InvariantViolation {
    /// Name of the operation whose invariant failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidKeySize { operation, .. }
            | Self::ChaCha20Poly1305IvTooLong { operation, .. } => *operation,
        }
    }

    /// Short description of the violated property.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidKeySize { .. } => "invalid keySize",
            Self::ChaCha20Poly1305IvTooLong { .. } => {
                "CHACHA20_POLY1305 IV longer than 12 bytes (CVE-2019-1543)"
            }
        }
    }

    /// Diagnostic components for the abort reporter: operation name first.
    #[must_use]
    pub const fn diagnostics(&self) -> [&'static str; 2] {
        [self.operation(), self.description()]
    }
}
