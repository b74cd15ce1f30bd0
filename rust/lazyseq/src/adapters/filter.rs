use crate::seq::Seq;

/// Yields the upstream elements for which the predicate holds.
#[derive(Clone)]
pub struct Filter<S, P> {
    seq: S,
    pred: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(seq: S, pred: P) -> Self {
        Filter { seq, pred }
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let Filter { seq, mut pred } = self;
        seq.run(|item| if pred(&item) { step(item) } else { true });
    }
}
