//! crates/logger/src/state.rs
//! Explicit, injectable configure-once state.

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-configuration flag with an explicit reset lifecycle.
///
/// The flag is owned by whoever wires the application together — typically
/// through an [`Applicator`](crate::Applicator) — rather than living as an
/// implicit module-level singleton. The check-and-set is atomic, so two
/// threads racing to initialize cannot both win.
#[derive(Debug)]
pub struct InitState {
    configured: AtomicBool,
}

impl InitState {
    /// Creates a fresh, unconfigured state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            configured: AtomicBool::new(false),
        }
    }

    /// Returns true when configuration has been applied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.configured.load(Ordering::Acquire)
    }

    /// Atomically claims the right to configure.
    ///
    /// Returns true for exactly one caller until [`reset`](Self::reset) is
    /// invoked; every other caller observes false and must not apply.
    pub fn mark_configured(&self) -> bool {
        self.configured
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Clears the flag so a later apply may configure again.
    pub fn reset(&self) {
        self.configured.store(false, Ordering::Release);
    }
}

impl Default for InitState {
    fn default() -> Self {
        Self::new()
    }
}
