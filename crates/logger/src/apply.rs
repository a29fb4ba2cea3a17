//! crates/logger/src/apply.rs
//! Binding configuration descriptions to the `log` facade.

use std::sync::{Arc, OnceLock};

use config::ConfigurationDescription;
use thiserror::Error;

use crate::logger::{EnvLogger, SharedLogger, max_level_filter};
use crate::state::InitState;

/// Errors returned when applying a configuration description fails.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The process is already configured; reset the applicator to
    /// reconfigure.
    #[error("logging is already initialized")]
    AlreadyInitialized,
    /// The `log` facade refused the logger because another library installed
    /// one first.
    #[error("logging facade rejected the logger: {0}")]
    Facade(#[from] log::SetLoggerError),
}

/// Applies configuration descriptions to the process-wide `log` facade.
///
/// The applicator owns the explicit [`InitState`] that makes initialization
/// idempotent: the first [`apply`](Self::apply) after construction (or after
/// [`reset`](Self::reset)) wins, and every other attempt is refused. Hold
/// one applicator in the top-level application wiring and route every
/// initialization through it.
#[derive(Debug)]
pub struct Applicator {
    state: InitState,
    installed: OnceLock<Arc<EnvLogger>>,
}

impl Applicator {
    /// Creates an applicator that has not configured anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: InitState::new(),
            installed: OnceLock::new(),
        }
    }

    /// Applies a description to the `log` facade.
    ///
    /// The first successful call installs a logger and sets the facade's
    /// maximum level to the loosest filter the description needs. After a
    /// [`reset`](Self::reset), a later call swaps the installed logger's
    /// configuration in place — the facade accepts only one logger per
    /// process, so the swap is what makes reconfiguration possible at all.
    ///
    /// Pre-existing loggers of other components are never touched; the
    /// description's entries only govern the targets they name.
    pub fn apply(&self, description: &ConfigurationDescription) -> Result<(), ApplyError> {
        if !self.state.mark_configured() {
            return Err(ApplyError::AlreadyInitialized);
        }

        let max_level = max_level_filter(description);

        if let Some(installed) = self.installed.get() {
            installed.swap(description.clone());
            log::set_max_level(max_level);
            return Ok(());
        }

        let shared = Arc::new(EnvLogger::new(description.clone()));
        match log::set_boxed_logger(Box::new(SharedLogger::new(Arc::clone(&shared)))) {
            Ok(()) => {
                let _ = self.installed.set(shared);
                log::set_max_level(max_level);
                Ok(())
            }
            Err(error) => {
                // Nothing was applied; surrender the claim on the flag.
                self.state.reset();
                Err(ApplyError::Facade(error))
            }
        }
    }

    /// Returns true when a configuration has been applied and not reset.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.state.is_configured()
    }

    /// Re-arms the applicator so the next [`apply`](Self::apply) succeeds.
    pub fn reset(&self) {
        self.state.reset();
    }

    /// The underlying configure-once state.
    #[must_use]
    pub const fn state(&self) -> &InitState {
        &self.state
    }
}

impl Default for Applicator {
    fn default() -> Self {
        Self::new()
    }
}
