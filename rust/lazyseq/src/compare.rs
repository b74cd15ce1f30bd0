//! Lockstep equality and ordering of two sequences.
//!
//! The left sequence is run directly and the right one is pulled through a
//! [`Cursor`](crate::Cursor): every left element is immediately followed by
//! exactly one pull on the right, so side-effecting producers on both sides
//! see the same rhythm.
//!
//! End detection is asymmetric. If the left sequence
//! ends first, the right one is probed once more to learn whether it ends
//! too. If the right one ends first, the left element already produced for
//! that step is the only extra work.

use std::cmp::Ordering;

use crate::{pull::pull, seq::Seq};

pub(crate) fn equal_by<A, B, F>(left: A, right: B, mut eq: F) -> bool
where
    A: Seq,
    B: Seq + Send,
    B::Item: Send,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    pull(right, |right| {
        let mut mismatch = false;
        left.run(|a| match right.advance() {
            Some(b) if eq(&a, &b) => true,
            _ => {
                mismatch = true;
                false
            }
        });
        !mismatch && right.advance().is_none()
    })
}

pub(crate) fn compare_by<A, B, F>(left: A, right: B, mut cmp: F) -> Ordering
where
    A: Seq,
    B: Seq + Send,
    B::Item: Send,
    F: FnMut(&A::Item, &B::Item) -> Ordering,
{
    pull(right, |right| {
        let mut verdict = None;
        left.run(|a| {
            let ordering = match right.advance() {
                Some(b) => cmp(&a, &b),
                None => Ordering::Greater,
            };
            if ordering.is_eq() {
                return true;
            }
            verdict = Some(ordering);
            false
        });
        verdict.unwrap_or_else(|| match right.advance() {
            Some(_) => Ordering::Less,
            None => Ordering::Equal,
        })
    })
}
