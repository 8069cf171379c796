#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Abort reporter.
//!
//! # Aborts
//!
//! Every function here ends in `std::process::abort()`. There is no return
//! path and no unwinding, so panic hooks, `catch_unwind` and destructors never
//! observe a violation. The fuzzing driver's crash handler sees `SIGABRT` and
//! stores the current input as a reproducer.

use std::io::Write;

use crate::violation::InvariantViolation;

/// Prefix of the line written to stderr before aborting.
pub const ASSERTION_PREFIX: &str = "Assertion failure: ";

/// Separator between diagnostic components.
pub const DIAGNOSTIC_SEPARATOR: &str = "-";

/// Formats diagnostics the way [`report_invariant_violation`] prints them.
#[must_use]
pub fn format_diagnostics(diagnostics: &[&str]) -> String {
    format!("{ASSERTION_PREFIX}{}", diagnostics.join(DIAGNOSTIC_SEPARATOR))
}

/// Prints `diagnostics` and terminates the process.
///
/// The joined line is written to stderr and both standard streams are flushed
/// before the abort, so the crash log always contains the violated invariant.
pub fn report_invariant_violation(diagnostics: &[&str]) -> ! {
    let line = format_diagnostics(diagnostics);
    tracing::error!(target: "xcheck::abort", "{}", line);
    terminate(&line)
}

/// Reports a typed violation. See [`report_invariant_violation`].
pub fn report(violation: &InvariantViolation) -> ! {
    let line = format_diagnostics(&violation.diagnostics());
    tracing::error!(
        target: "xcheck::abort",
        operation = violation.operation(),
        detail = %violation,
        "{}",
        line
    );
    terminate(&line)
}

// Write errors are ignored: the process is going down either way.
fn terminate(line: &str) -> ! {
    let _ = std::io::stdout().flush();
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{line}");
    let _ = stderr.flush();

    std::process::abort();
}

/// Aborts if `result` carries a violation, returns otherwise.
pub fn enforce(result: Result<(), InvariantViolation>) {
    if let Err(violation) = result {
        report(&violation);
    }
}
