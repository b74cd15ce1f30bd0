//! Producer closures that make consumption observable.
//!
//! Every producer here bumps its [`Tally`] immediately before handing an
//! element to the step callback, so after a traversal the tally holds the
//! exact number of elements that were pulled out of the producer.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::tally::Tally;

/// Producer over a fixed list of values that counts each produced element.
pub fn counted<T>(
    values: Vec<T>,
    produced: Tally,
) -> impl FnOnce(&mut dyn FnMut(T) -> bool) + Send + 'static
where
    T: Send + 'static,
{
    move |step: &mut dyn FnMut(T) -> bool| {
        for value in values {
            produced.bump();
            if !step(value) {
                return;
            }
        }
    }
}

/// Producer of `0, 1, 2, ...`, bounded by `limit` when given, that counts
/// each produced element. With `limit == None` it only ends when the
/// consumer stops it.
pub fn counted_naturals(
    limit: Option<usize>,
    produced: Tally,
) -> impl FnOnce(&mut dyn FnMut(usize) -> bool) + Send + 'static {
    move |step: &mut dyn FnMut(usize) -> bool| {
        let mut i = 0usize;
        while limit.is_none_or(|limit| i < limit) {
            produced.bump();
            if !step(i) {
                return;
            }
            i += 1;
        }
    }
}

/// Observes how a producer's traversal ended.
#[derive(Debug, Clone, Default)]
pub struct StopProbe {
    produced: Tally,
    stopped: Arc<AtomicBool>,
    exhausted: Arc<AtomicBool>,
    cleaned_up: Arc<AtomicBool>,
}

impl StopProbe {
    pub fn new() -> StopProbe {
        StopProbe::default()
    }

    /// Number of elements handed to the step callback.
    pub fn produced(&self) -> usize {
        self.produced.get()
    }

    /// `true` if the step callback returned `false` at some point.
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// `true` if the producer ran out of values without being stopped.
    pub fn exhausted(&self) -> bool {
        self.exhausted.load(Ordering::SeqCst)
    }

    /// `true` once the producer has returned, by any path except a panic.
    pub fn cleaned_up(&self) -> bool {
        self.cleaned_up.load(Ordering::SeqCst)
    }
}

/// Producer over `values` that reports to `probe` how it was driven.
pub fn probed<T>(
    values: Vec<T>,
    probe: &StopProbe,
) -> impl FnOnce(&mut dyn FnMut(T) -> bool) + Send + 'static
where
    T: Send + 'static,
{
    let probe = probe.clone();
    move |step: &mut dyn FnMut(T) -> bool| {
        let mut stopped = false;
        for value in values {
            probe.produced.bump();
            if !step(value) {
                stopped = true;
                break;
            }
        }
        if stopped {
            probe.stopped.store(true, Ordering::SeqCst);
        } else {
            probe.exhausted.store(true, Ordering::SeqCst);
        }
        probe.cleaned_up.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_stops_on_false() {
        let produced = Tally::new();
        let producer = counted(vec![1, 2, 3, 4], produced.clone());
        let mut seen = Vec::new();
        producer(&mut |v| {
            seen.push(v);
            v < 2
        });
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn test_counted_naturals_limit() {
        let produced = Tally::new();
        let mut sum = 0;
        counted_naturals(Some(4), produced.clone())(&mut |v| {
            sum += v;
            true
        });
        assert_eq!(sum, 6);
        assert_eq!(produced.get(), 4);
    }

    #[test]
    fn test_probe_records_stop() {
        let probe = StopProbe::new();
        probed(vec!['a', 'b', 'c'], &probe)(&mut |c| c != 'b');
        assert_eq!(probe.produced(), 2);
        assert!(probe.stopped());
        assert!(!probe.exhausted());
        assert!(probe.cleaned_up());
    }

    #[test]
    fn test_probe_records_exhaustion() {
        let probe = StopProbe::new();
        probed(vec![1u8], &probe)(&mut |_| true);
        assert!(probe.exhausted());
        assert!(!probe.stopped());
    }
}
