//! Arithmetic progressions over primitive integers.
//!
//! Every constructor here produces a [`RangeSeq`]. Advancing is checked: when
//! the next value would overflow the integer type the sequence ends instead
//! of wrapping. A zero step is treated as ascending; a non-empty range with a
//! zero step repeats `start` until the consumer stops.

use num_traits::PrimInt;

use crate::seq::Seq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound<T> {
    Exclusive(T),
    Inclusive(T),
    Unbounded,
}

/// A lazy arithmetic progression `start, start + step, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSeq<T> {
    start: T,
    end: Bound<T>,
    step: T,
}

impl<T: PrimInt> RangeSeq<T> {
    fn new(start: T, end: Bound<T>, step: T) -> Self {
        RangeSeq { start, end, step }
    }

    #[inline]
    fn contains(&self, value: T) -> bool {
        let ascending = self.step >= T::zero();
        match self.end {
            Bound::Exclusive(end) if ascending => value < end,
            Bound::Exclusive(end) => value > end,
            Bound::Inclusive(end) if ascending => value <= end,
            Bound::Inclusive(end) => value >= end,
            Bound::Unbounded => true,
        }
    }
}

impl<T: PrimInt> Seq for RangeSeq<T> {
    type Item = T;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(T) -> bool,
    {
        let mut current = self.start;
        while self.contains(current) {
            if !step(current) {
                return;
            }
            match current.checked_add(&self.step) {
                Some(next) => current = next,
                None => return,
            }
        }
    }
}

/// Counts from `start` up to, but excluding, `end`.
pub fn range<T: PrimInt>(start: T, end: T) -> RangeSeq<T> {
    range_by(start, end, T::one())
}

/// Counts from `start` towards `end` by `step`, excluding `end`.
///
/// A negative `step` counts down while the value is greater than `end`.
///
/// ```
/// use lazyseq::{SeqExt, range_by};
///
/// assert_eq!(range_by(0, 5, 2).collect::<Vec<i32>>(), vec![0, 2, 4]);
/// assert_eq!(range_by(5, 0, -2).collect::<Vec<i32>>(), vec![5, 3, 1]);
/// ```
pub fn range_by<T: PrimInt>(start: T, end: T, step: T) -> RangeSeq<T> {
    RangeSeq::new(start, Bound::Exclusive(end), step)
}

/// Counts from `start` up to and including `end`.
pub fn range_inclusive<T: PrimInt>(start: T, end: T) -> RangeSeq<T> {
    range_inclusive_by(start, end, T::one())
}

/// Counts from `start` towards `end` by `step`, including `end` when the
/// progression hits it.
pub fn range_inclusive_by<T: PrimInt>(start: T, end: T, step: T) -> RangeSeq<T> {
    RangeSeq::new(start, Bound::Inclusive(end), step)
}

/// Counts up from `start` until the integer type runs out.
pub fn range_from<T: PrimInt>(start: T) -> RangeSeq<T> {
    range_from_by(start, T::one())
}

/// Counts from `start` by `step` until the next value would overflow.
pub fn range_from_by<T: PrimInt>(start: T, step: T) -> RangeSeq<T> {
    RangeSeq::new(start, Bound::Unbounded, step)
}
