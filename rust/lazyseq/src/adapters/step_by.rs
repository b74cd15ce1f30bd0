use lazyseq_common::{Result, verify_arg};

use crate::seq::Seq;

/// Yields the upstream elements at positions `0, n, 2n, ...`.
#[derive(Debug, Clone)]
pub struct StepBy<S> {
    seq: S,
    n: usize,
}

impl<S> StepBy<S> {
    /// Creates a `StepBy` adapter.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `n` is 0; no adapter is created.
    pub fn new(seq: S, n: usize) -> Result<Self> {
        verify_arg!(n, n > 0);
        Ok(StepBy { seq, n })
    }
}

impl<S: Seq> Seq for StepBy<S> {
    type Item = S::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let n = self.n;
        if n == 1 {
            return self.seq.run(step);
        }
        // Position modulo `n`; wraps instead of growing so that infinite
        // sequences cannot overflow it.
        let mut phase = 0usize;
        self.seq.run(|item| {
            let emit = phase == 0;
            phase += 1;
            if phase == n {
                phase = 0;
            }
            if emit { step(item) } else { true }
        });
    }
}
