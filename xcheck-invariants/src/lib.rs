//! # xcheck Invariants
//!
//! Backend-independent invariant checks for differential cryptographic
//! fuzzing. After a backend has executed an operation, the harness hands the
//! descriptor and the optional result to the dispatch surface; the checks
//! either return silently or abort the process with a diagnostic naming the
//! operation and the violated property.
//!
//! ## Invariants
//!
//! | Kind | Check |
//! |------|-------|
//! | `KDF_*` (nine kinds) | produced key length equals requested `key_size` |
//! | `SymmetricEncrypt` | CVE-2019-1543: ChaCha20-Poly1305 IV at most 12 bytes |
//! | everything else | none yet |
//!
//! An absent result never violates anything.
//!
//! ## Usage
//!
//! ```no_run
//! use xcheck_invariants::dispatch::test_kdf_pbkdf2;
//! use xcheck_types::operation::KdfPbkdf2;
//! use xcheck_types::{Buffer, DigestType};
//!
//! let op = KdfPbkdf2 {
//!     digest_type: DigestType::Sha256,
//!     password: Buffer::from(&b"password"[..]),
//!     salt: Buffer::from(&b"salt"[..]),
//!     iterations: 1,
//!     key_size: 32,
//! };
//! let key = Buffer::zeroed(32);
//! test_kdf_pbkdf2(&op, Some(&key)); // returns; a 16-byte key would abort
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Fatal reporting of violations.
pub mod abort;
/// Which checks are active.
pub mod config;
/// Per-kind entry points and the routing table.
pub mod dispatch;
/// Generic KDF output length check.
pub mod key_size;
/// Subscriber setup for harness binaries.
pub mod logging;
/// Checks for specific historical library defects.
pub mod regression;
/// Violation values and their diagnostics.
pub mod violation;

pub use abort::{report, report_invariant_violation};
pub use config::{ConfigError, InvariantConfig, global_config, install_global_config};
pub use dispatch::{check, check_with, evaluate};
pub use violation::InvariantViolation;
