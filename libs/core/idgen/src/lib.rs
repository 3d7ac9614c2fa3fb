//! Monotonic 64-bit identifier generation.
//!
//! Each repository instance owns its own [`IdGenerator`], so separate
//! repositories (for example, one per test) never share a sequence.

use std::sync::atomic::{AtomicI64, Ordering};

use thiserror::Error;

/// The identifier space has been exhausted (or the seed was corrupted).
///
/// Once this is returned, the owning repository must stop accepting inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("id overflow: generator produced a negative identifier")]
pub struct IdOverflow;

/// Conventional seed: the first generated identifier is `0`.
pub const DEFAULT_SEED: i64 = -1;

/// Lock-free generator of unique, monotonically increasing identifiers.
///
/// A single atomic increment per call; concurrent callers never observe
/// duplicates or gaps.
#[derive(Debug)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Generator seeded at [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Generator whose first identifier is `seed + 1`.
    pub fn with_seed(seed: i64) -> Self {
        Self {
            last: AtomicI64::new(seed),
        }
    }

    /// Atomically produce the next identifier.
    ///
    /// Fails with [`IdOverflow`] when the increment wraps into negative
    /// territory (signed overflow or a corrupted seed); the counter is left
    /// poisoned so every later call keeps failing.
    pub fn generate(&self) -> Result<i64, IdOverflow> {
        let id = self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        if id < 0 {
            return Err(IdOverflow);
        }
        Ok(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
