//! Generation gate for trailing-debounced async work.
//!
//! DESIGN
//! ======
//! A scheduled task records the generation it was armed with and re-checks
//! it after its delay; any newer `arm` invalidates it. This keeps at most
//! one live pending call without cancelling futures directly.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Delay applied to roster search input before refetching.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Shared generation counter; the most recently armed task wins.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every previously armed task and return the new token.
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `token` is still the latest armed generation.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == token
    }
}
