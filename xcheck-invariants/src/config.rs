#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Which invariant checks are active.
//!
//! Everything is on by default. A harness can switch all checks off, or only
//! the checks of particular operation kinds, either programmatically or via
//! the environment:
//!
//! - `XCHECK_DISABLE_TESTS`: set to any value to disable every check
//! - `XCHECK_DISABLE_KINDS`: comma-separated kind names, e.g. `KDF_SCRYPT,CMAC`
//!
//! The process-wide configuration is set at most once. After the first check
//! has read it, identical inputs always get identical verdicts.

use std::collections::BTreeSet;
use std::sync::OnceLock;
use thiserror::Error;
use xcheck_types::OperationKind;

/// Environment variable that disables every check.
pub const ENV_DISABLE_TESTS: &str = "XCHECK_DISABLE_TESTS";

/// Environment variable listing kinds whose checks are disabled.
pub const ENV_DISABLE_KINDS: &str = "XCHECK_DISABLE_KINDS";

/// Errors raised while building or installing a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A kind list names something that is not an operation kind.
    #[error("Unknown operation kind in {variable}: {name}")]
    UnknownKind {
        /// Source of the list.
        variable: &'static str,
        /// The rejected name.
        name: String,
    },

    /// The process-wide configuration was already fixed.
    #[error("Invariant configuration is already initialised")]
    AlreadyInitialized,
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Which checks run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantConfig {
    /// Master switch; `false` turns every check off.
    pub enabled: bool,
    /// Kinds whose checks are skipped while `enabled` is set.
    pub disabled_kinds: BTreeSet<OperationKind>,
}

impl Default for InvariantConfig {
    fn default() -> Self {
        Self { enabled: true, disabled_kinds: BTreeSet::new() }
    }
}

impl InvariantConfig {
    /// Configuration with every check switched off.
    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    /// Returns a copy with the given kind switched off.
    #[must_use]
    pub fn without(mut self, kind: OperationKind) -> Self {
        self.disabled_kinds.insert(kind);
        self
    }

    /// Whether checks for `kind` run under this configuration.
    #[must_use]
    pub fn is_active(&self, kind: OperationKind) -> bool {
        self.enabled && !self.disabled_kinds.contains(&kind)
    }

    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if `XCHECK_DISABLE_KINDS` names an unknown kind.
    pub fn from_env() -> Result<Self> {
        let disable_all = std::env::var_os(ENV_DISABLE_TESTS).is_some();
        let kinds = std::env::var(ENV_DISABLE_KINDS).unwrap_or_default();
        Self::from_parts(disable_all, &kinds)
    }

    /// Builds a configuration from an "all disabled" flag and a kind list.
    ///
    /// # Errors
    /// Returns an error if `kinds` names an unknown kind.
    pub fn from_parts(disable_all: bool, kinds: &str) -> Result<Self> {
        let disabled_kinds = kinds
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                name.parse::<OperationKind>().map_err(|_| ConfigError::UnknownKind {
                    variable: ENV_DISABLE_KINDS,
                    name: name.to_string(),
                })
            })
            .collect::<Result<BTreeSet<_>>>()?;

        Ok(Self { enabled: !disable_all, disabled_kinds })
    }
}

static GLOBAL_INVARIANT_CONFIG: OnceLock<InvariantConfig> = OnceLock::new();

// An unparsable environment is logged and replaced by the default, with all
// checks on.
fn load_env_config() -> InvariantConfig {
    match InvariantConfig::from_env() {
        Ok(config) => {
            if config != InvariantConfig::default() {
                tracing::info!(
                    enabled = config.enabled,
                    disabled = ?config.disabled_kinds,
                    "invariant checks restricted by environment"
                );
            }
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invariant configuration from environment: {e}");
            InvariantConfig::default()
        }
    }
}

/// Process-wide configuration.
///
/// Fixed on first use: either the value passed to [`install_global_config`]
/// or, failing that, the environment. It never changes afterwards.
#[must_use]
pub fn global_config() -> &'static InvariantConfig {
    GLOBAL_INVARIANT_CONFIG.get_or_init(load_env_config)
}

/// Fixes the process-wide configuration before the first check runs.
///
/// # Errors
/// Returns [`ConfigError::AlreadyInitialized`] if a configuration was
/// installed before or a check has already read the environment.
pub fn install_global_config(config: InvariantConfig) -> Result<()> {
    GLOBAL_INVARIANT_CONFIG.set(config).map_err(|_| ConfigError::AlreadyInitialized)
}
