//! Concatenation adapters.

use crate::seq::{Seq, run_while};

/// Yields the elements of `first`, then those of `second`.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Chain { first, second }
    }
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(A::Item) -> bool,
    {
        if run_while(self.first, &mut step) {
            self.second.run(step);
        }
    }
}

/// Yields the elements of every sequence in a collection, in order.
///
/// Created by [`chain_all`].
#[derive(Debug, Clone)]
pub struct ChainAll<I> {
    seqs: I,
}

/// Concatenates any number of sequences of one type.
///
/// A sequence is started only after the previous one is exhausted, and
/// empty sequences are passed over. Once downstream stops, no further
/// sequence is taken from `seqs`.
///
/// ```
/// use lazyseq::{SeqExt, chain_all, of};
///
/// let all: Vec<i32> = chain_all([of(vec![1, 2]), of(vec![]), of(vec![3, 4, 5])]).collect();
/// assert_eq!(all, vec![1, 2, 3, 4, 5]);
/// ```
pub fn chain_all<I>(seqs: I) -> ChainAll<I>
where
    I: IntoIterator,
    I::Item: Seq,
{
    ChainAll { seqs }
}

impl<I> Seq for ChainAll<I>
where
    I: IntoIterator,
    I::Item: Seq,
{
    type Item = <I::Item as Seq>::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        for seq in self.seqs {
            if !run_while(seq, &mut step) {
                return;
            }
        }
    }
}
