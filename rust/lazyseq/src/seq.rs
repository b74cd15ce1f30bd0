//! The sequence protocol and its combinator surface.

use std::cmp::Ordering;

use lazyseq_common::Result;

use crate::{
    adapters::{
        chain::Chain, cycle::Cycle, enumerate::Enumerate, filter::Filter, flatten::Flatten,
        intersperse::Intersperse, map::Map, skip::Skip, skip::SkipWhile, step_by::StepBy,
        take::Take, take::TakeWhile, zip::Zip,
    },
    compare, consume,
};

/// A producer of ordered elements driven by a stepping callback.
///
/// `run` calls `step` once per element, in production order, until either
/// the sequence has nothing more to produce or `step` returns `false`.
/// Implementations must uphold three rules:
///
/// - once `step` returns `false`, no further element is produced and `step`
///   is never called again; the sequence releases whatever it holds and
///   returns
/// - an empty sequence never calls `step`
/// - a panic raised by `step` is not caught
///
/// `run` consumes the sequence. A sequence that can be traversed more than
/// once implements `Clone`, and each traversal runs its own clone.
pub trait Seq: Sized {
    type Item;

    fn run<F>(self, step: F)
    where
        F: FnMut(Self::Item) -> bool;
}

/// Runs `seq` into a borrowed step function and reports whether the
/// consumer still wants more elements afterwards.
///
/// Returns `false` only if `step` returned `false`; exhaustion of `seq`
/// returns `true`.
pub(crate) fn run_while<S, F>(seq: S, step: &mut F) -> bool
where
    S: Seq,
    F: FnMut(S::Item) -> bool,
{
    let mut more = true;
    seq.run(|item| {
        more = step(item);
        more
    });
    more
}

/// Combinators and consumers available on every [`Seq`].
///
/// Adapter methods are lazy: they only wrap `self`, and nothing is pulled
/// from upstream until the returned sequence is run. Consumer methods run
/// the sequence immediately.
pub trait SeqExt: Seq {
    /// Yields `f(x)` for each element `x`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Yields the elements for which `pred` returns `true`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Pairs each element with its zero-based index.
    ///
    /// The sequence stops, without wrapping, after yielding the element at
    /// index `usize::MAX`.
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Inserts a clone of `sep` between every two adjacent elements.
    fn intersperse(self, sep: Self::Item) -> Intersperse<Self, Self::Item>
    where
        Self::Item: Clone,
    {
        Intersperse::new(self, sep)
    }

    /// Yields at most the first `n` elements.
    ///
    /// After the `n`-th element is accepted the upstream sequence is stopped
    /// without being asked for another element.
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// Discards the first `n` elements and yields the rest.
    fn skip(self, n: usize) -> Skip<Self> {
        Skip::new(self, n)
    }

    /// Yields the elements at positions `0, n, 2n, ...`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `n` is 0.
    fn step_by(self, n: usize) -> Result<StepBy<Self>> {
        StepBy::new(self, n)
    }

    /// Yields elements while `pred` holds; the first failing element is
    /// consumed but not yielded.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    /// Discards elements while `pred` holds, then yields the rest.
    fn skip_while<P>(self, pred: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, pred)
    }

    /// Yields the elements of each inner sequence in turn.
    fn flatten(self) -> Flatten<Self>
    where
        Self::Item: Seq,
    {
        Flatten::new(self)
    }

    /// Yields the elements of `self`, then those of `other`.
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Seq<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Yields pairs `(a, b)` until either sequence ends.
    ///
    /// `other` is advanced through a pull cursor, so it and its items must
    /// be `Send`.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        B: Seq + Send,
        B::Item: Send,
    {
        Zip::new(self, other)
    }

    /// Buffers every element now, then repeats them forever.
    ///
    /// An empty source produces an empty sequence.
    fn cycle(self) -> Cycle<Self::Item>
    where
        Self::Item: Clone,
    {
        Cycle::new(self)
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        consume::fold(self, init, f)
    }

    /// Folds using the first element as the initial accumulator; `None` if
    /// the sequence is empty.
    fn reduce<F>(self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        consume::reduce(self, f)
    }

    /// Counts the elements.
    ///
    /// # Errors
    ///
    /// Returns an overflow error if the count does not fit a `usize`.
    fn count(self) -> Result<usize> {
        consume::count(self)
    }

    fn find<P>(self, pred: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        consume::find(self, pred)
    }

    /// Returns the element at zero-based index `n`, stopping as soon as it
    /// is reached.
    fn nth(self, n: usize) -> Option<Self::Item> {
        consume::nth(self, n)
    }

    fn last(self) -> Option<Self::Item> {
        consume::last(self)
    }

    /// `true` if every element satisfies `pred` (and for an empty sequence).
    fn all<P>(self, pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        consume::all(self, pred)
    }

    /// `true` if some element satisfies `pred`; `false` for an empty sequence.
    fn any<P>(self, pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        consume::any(self, pred)
    }

    fn for_each<F>(self, f: F)
    where
        F: FnMut(Self::Item),
    {
        consume::for_each(self, f)
    }

    /// Collects every element into any default-constructible, extendable
    /// container.
    fn collect<C>(self) -> C
    where
        C: Default + Extend<Self::Item>,
    {
        consume::collect(self)
    }

    /// `true` if both sequences yield equal elements in the same order.
    fn equal<B>(self, other: B) -> bool
    where
        B: Seq + Send,
        B::Item: Send,
        Self::Item: PartialEq<B::Item>,
    {
        compare::equal_by(self, other, |a, b| a == b)
    }

    /// Like [`SeqExt::equal`], with a caller-supplied element equality.
    fn equal_by<B, F>(self, other: B, eq: F) -> bool
    where
        B: Seq + Send,
        B::Item: Send,
        F: FnMut(&Self::Item, &B::Item) -> bool,
    {
        compare::equal_by(self, other, eq)
    }

    /// Lexicographic comparison; a proper prefix is `Less`.
    fn compare<B>(self, other: B) -> Ordering
    where
        B: Seq<Item = Self::Item> + Send,
        Self::Item: Ord + Send,
    {
        compare::compare_by(self, other, |a, b| a.cmp(b))
    }

    /// Like [`SeqExt::compare`], with a caller-supplied element ordering.
    fn compare_by<B, F>(self, other: B, cmp: F) -> Ordering
    where
        B: Seq + Send,
        B::Item: Send,
        F: FnMut(&Self::Item, &B::Item) -> Ordering,
    {
        compare::compare_by(self, other, cmp)
    }
}

impl<S: Seq> SeqExt for S {}

