//! # Identifier Allocator
//!
//! One counter shared by every actor in the process, so an identifier handed
//! to a dish is never handed to an order (or to another dish) again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Issues unique, monotonically increasing identifiers.
///
/// Cloning is cheap and every clone draws from the same counter. Identifiers
/// are never reused, even after the entity carrying one has been deleted.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    counter: Arc<AtomicU64>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Returns the next identifier, or `None` once the counter has reached
    /// `u64::MAX`. The counter never wraps, so an id is never issued twice.
    pub fn next(&self) -> Option<String> {
        self.counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .ok()
            .map(|n| n.to_string())
    }

    /// Marks an externally supplied identifier as taken.
    ///
    /// Seeded entities bring their own ids. When such an id is a decimal
    /// number the counter is moved past it; any other shape can never be
    /// produced by [`IdAllocator::next`] and needs no bookkeeping. Reserving
    /// `u64::MAX` exhausts the allocator.
    pub fn reserve(&self, id: &str) {
        if let Ok(taken) = id.parse::<u64>() {
            self.counter.fetch_max(taken.saturating_add(1), Ordering::SeqCst);
        }
    }
}
