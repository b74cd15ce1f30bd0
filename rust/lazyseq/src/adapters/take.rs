//! Prefix adapters: [`Take`] and [`TakeWhile`].

use crate::seq::Seq;

/// Yields at most `n` upstream elements.
#[derive(Debug, Clone)]
pub struct Take<S> {
    seq: S,
    n: usize,
}

impl<S> Take<S> {
    pub fn new(seq: S, n: usize) -> Self {
        Take { seq, n }
    }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let mut remaining = self.n;
        if remaining == 0 {
            return;
        }
        self.seq.run(|item| {
            if !step(item) {
                return false;
            }
            remaining -= 1;
            remaining > 0
        });
    }
}

/// Yields upstream elements until the predicate first fails.
///
/// The failing element is consumed from upstream but not forwarded, and
/// nothing after it is requested.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    seq: S,
    pred: P,
}

impl<S, P> TakeWhile<S, P> {
    pub fn new(seq: S, pred: P) -> Self {
        TakeWhile { seq, pred }
    }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let TakeWhile { seq, mut pred } = self;
        seq.run(|item| pred(&item) && step(item));
    }
}
