use crate::seq::Seq;

/// Yields `f(x)` for each upstream element `x`.
#[derive(Clone)]
pub struct Map<S, F> {
    seq: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub fn new(seq: S, f: F) -> Self {
        Map { seq, f }
    }
}

impl<B, S, F> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn run<G>(self, mut step: G)
    where
        G: FnMut(B) -> bool,
    {
        let Map { seq, mut f } = self;
        seq.run(|item| step(f(item)));
    }
}
