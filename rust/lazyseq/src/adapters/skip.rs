//! Prefix-dropping adapters: [`Skip`] and [`SkipWhile`].

use crate::seq::Seq;

/// Discards the first `n` upstream elements and forwards the rest.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    seq: S,
    n: usize,
}

impl<S> Skip<S> {
    pub fn new(seq: S, n: usize) -> Self {
        Skip { seq, n }
    }
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let mut to_skip = self.n;
        if to_skip == 0 {
            return self.seq.run(step);
        }
        self.seq.run(|item| {
            if to_skip > 0 {
                to_skip -= 1;
                return true;
            }
            step(item)
        });
    }
}

/// Discards upstream elements while the predicate holds, then forwards the
/// first failing element and everything after it.
///
/// The predicate is evaluated once per discarded element plus once for the
/// first forwarded one, and never again after that.
#[derive(Clone)]
pub struct SkipWhile<S, P> {
    seq: S,
    pred: P,
}

impl<S, P> SkipWhile<S, P> {
    pub fn new(seq: S, pred: P) -> Self {
        SkipWhile { seq, pred }
    }
}

impl<S, P> Seq for SkipWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let SkipWhile { seq, mut pred } = self;
        let mut skipping = true;
        seq.run(|item| {
            if skipping {
                if pred(&item) {
                    return true;
                }
                skipping = false;
            }
            step(item)
        });
    }
}
