use crate::{pull::pull, seq::Seq};

/// Yields pairs of elements from two sequences until either ends.
///
/// The left sequence is run directly; the right one is advanced through a
/// [`Cursor`](crate::Cursor), one element per left element. When the left
/// sequence ends, the right one is not asked for anything further; when the
/// right one ends, the left element already produced for that step is
/// dropped.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Zip { left, right }
    }
}

impl<A, B> Seq for Zip<A, B>
where
    A: Seq,
    B: Seq + Send,
    B::Item: Send,
{
    type Item = (A::Item, B::Item);

    fn run<F>(self, mut step: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        let Zip { left, right } = self;
        pull(right, |right| {
            left.run(|a| match right.advance() {
                Some(b) => step((a, b)),
                None => false,
            })
        });
    }
}
