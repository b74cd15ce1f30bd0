use crate::seq::{Seq, run_while};

/// Yields the elements of each inner sequence produced by the outer one.
///
/// Each inner sequence is drained (or stopped by downstream) before the next
/// outer element is requested. A stop inside an inner sequence also stops
/// the outer one.
///
/// Flattening a sequence of pair sequences yields pairs, so the same adapter
/// covers both shapes.
#[derive(Debug, Clone)]
pub struct Flatten<S> {
    seq: S,
}

impl<S> Flatten<S> {
    pub fn new(seq: S) -> Self {
        Flatten { seq }
    }
}

impl<S> Seq for Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    type Item = <S::Item as Seq>::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        self.seq.run(|inner| run_while(inner, &mut step));
    }
}
