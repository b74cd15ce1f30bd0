//! Two-argument closure variants for sequences of pairs.
//!
//! A sequence whose item is `(K, V)` is already a [`Seq`], so every
//! [`SeqExt`] adapter and consumer applies to it directly; tuples compare
//! component-wise, which makes [`SeqExt::equal`] and [`SeqExt::compare`]
//! the keyed comparisons. [`PairSeqExt`] adds the methods whose closures
//! are more natural with the key and value as separate arguments.
//!
//! ```
//! use lazyseq::{PairSeqExt, SeqExt, of};
//!
//! let total = of(["a", "bb", "ccc"]).enumerate().fold2(0, |acc, i, s| acc + i * s.len());
//! assert_eq!(total, 2 + 6);
//! ```

use std::cmp::Ordering;

use crate::{
    adapters::{filter::Filter, map::Map, skip::SkipWhile, take::TakeWhile},
    compare,
    seq::{Seq, SeqExt},
};

/// Adapters and consumers for sequences of `(K, V)` pairs.
pub trait PairSeqExt<K, V>: Seq<Item = (K, V)> {
    /// Yields `f(k, v)` for each pair.
    fn map2<B, F>(self, mut f: F) -> Map<Self, impl FnMut((K, V)) -> B>
    where
        F: FnMut(K, V) -> B,
    {
        self.map(move |(k, v)| f(k, v))
    }

    /// Maps each pair to a new pair.
    fn map2_to<K2, V2, F>(self, mut f: F) -> Map<Self, impl FnMut((K, V)) -> (K2, V2)>
    where
        F: FnMut(K, V) -> (K2, V2),
    {
        self.map(move |(k, v)| f(k, v))
    }

    fn filter2<P>(self, mut pred: P) -> Filter<Self, impl FnMut(&(K, V)) -> bool>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.filter(move |(k, v)| pred(k, v))
    }

    fn take_while2<P>(self, mut pred: P) -> TakeWhile<Self, impl FnMut(&(K, V)) -> bool>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.take_while(move |(k, v)| pred(k, v))
    }

    fn skip_while2<P>(self, mut pred: P) -> SkipWhile<Self, impl FnMut(&(K, V)) -> bool>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.skip_while(move |(k, v)| pred(k, v))
    }

    fn fold2<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, K, V) -> B,
    {
        self.fold(init, |acc, (k, v)| f(acc, k, v))
    }

    /// Returns the first pair for which `pred` holds.
    fn find2<P>(self, mut pred: P) -> Option<(K, V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.find(|(k, v)| pred(k, v))
    }

    fn all2<P>(self, mut pred: P) -> bool
    where
        P: FnMut(K, V) -> bool,
    {
        self.all(|(k, v)| pred(k, v))
    }

    fn any2<P>(self, mut pred: P) -> bool
    where
        P: FnMut(K, V) -> bool,
    {
        self.any(|(k, v)| pred(k, v))
    }

    fn for_each2<F>(self, mut f: F)
    where
        F: FnMut(K, V),
    {
        self.for_each(|(k, v)| f(k, v))
    }

    /// Pairwise equality with a four-argument predicate, walking `other` in
    /// lockstep like [`SeqExt::equal_by`].
    fn equal_by2<K2, V2, B, F>(self, other: B, mut eq: F) -> bool
    where
        B: Seq<Item = (K2, V2)> + Send,
        K2: Send,
        V2: Send,
        F: FnMut(&K, &V, &K2, &V2) -> bool,
    {
        compare::equal_by(self, other, |(k1, v1), (k2, v2)| eq(k1, v1, k2, v2))
    }

    /// Lexicographic comparison with a four-argument ordering, walking
    /// `other` in lockstep like [`SeqExt::compare_by`].
    fn compare_by2<K2, V2, B, F>(self, other: B, mut cmp: F) -> Ordering
    where
        B: Seq<Item = (K2, V2)> + Send,
        K2: Send,
        V2: Send,
        F: FnMut(&K, &V, &K2, &V2) -> Ordering,
    {
        compare::compare_by(self, other, |(k1, v1), (k2, v2)| cmp(k1, v1, k2, v2))
    }
}

impl<K, V, S> PairSeqExt<K, V> for S where S: Seq<Item = (K, V)> {}
