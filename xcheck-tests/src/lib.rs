//! # xcheck-tests
//!
//! Cross-crate test suite for xcheck providing:
//!
//! - **Fixtures**: sample descriptors and results for every operation kind
//! - **Concurrency Tests**: independent checks from many threads
//! - **Abort Contract** (`tests/abort_contract.rs`): violations terminate the
//!   process with diagnostics, observed from a child process
//! - **Property Tests** (`tests/proptest_*.rs`)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p xcheck-tests
//! cargo test -p xcheck-tests --test abort_contract
//! ```
//!
//! ## Test Naming Convention
//!
//! - Abort contract: `abort_<kind>_<scenario>` / `survives_<kind>_<scenario>`
//! - Concurrency: `concurrent_<operation>_<scenario>`

#![allow(clippy::expect_used)]

pub mod concurrency;
pub mod fixtures;
