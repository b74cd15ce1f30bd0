//! A cloneable, thread-safe event counter.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Shared counter used to observe side effects of producers and callbacks.
///
/// Clones share the same count, so a test can hand one clone to a producer
/// (which may run on a helper thread behind a pull cursor) and read the
/// total from another.
#[derive(Debug, Clone, Default)]
pub struct Tally(Arc<AtomicUsize>);

impl Tally {
    pub fn new() -> Tally {
        Tally::default()
    }

    /// Increments the counter and returns the new value.
    #[inline]
    pub fn bump(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }
}
