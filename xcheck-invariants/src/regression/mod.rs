//! Regression Checks
//!
//! Each check here encodes one historical library defect. They are narrow on
//! purpose: a check names the exact construction it guards and leaves every
//! other cipher or mode alone, even where a general rule looks tempting.
//!
//! ## File Naming Convention
//!
//! `cve_YYYY_NNNN.rs` for advisories with a CVE, otherwise
//! `<library>_<short_description>.rs`.
//!
//! ## Adding a New Regression Check
//!
//! 1. Create a new file named after the advisory
//! 2. Add the module declaration and an entry in [`ALL_REGRESSIONS`] here
//! 3. Include a doc comment with the advisory link, the defect, and the
//!    observable symptom the check looks for
//! 4. Route the predicate from `dispatch::evaluate` for the affected kind

/// ChaCha20-Poly1305 IV length (CVE-2019-1543).
pub mod cve_2019_1543;

pub use cve_2019_1543::{CHACHA20_POLY1305_MAX_IV_LEN, chacha20_poly1305_iv_violation};

use xcheck_types::OperationKind;

/// Catalogue entry for a regression check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regression {
    /// Advisory identifier.
    pub id: &'static str,
    /// Operation kind the check is attached to.
    pub kind: OperationKind,
    /// One-line description of the defect.
    pub summary: &'static str,
}

/// Every regression check wired into the dispatch surface.
pub const ALL_REGRESSIONS: &[Regression] = &[Regression {
    id: "CVE-2019-1543",
    kind: OperationKind::SymmetricEncrypt,
    summary: "OpenSSL ChaCha20-Poly1305 accepted IVs longer than 12 bytes",
}];
