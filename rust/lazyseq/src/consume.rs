//! Terminal consumers.
//!
//! These run a sequence directly (no cursor) and return as soon as the
//! answer is known, which stops the sequence at that element.

use lazyseq_common::{Result, error::Error};

use crate::seq::Seq;

pub(crate) fn fold<S, B, F>(seq: S, init: B, mut f: F) -> B
where
    S: Seq,
    F: FnMut(B, S::Item) -> B,
{
    let mut acc = Some(init);
    seq.run(|item| {
        if let Some(prev) = acc.take() {
            acc = Some(f(prev, item));
        }
        true
    });
    match acc {
        Some(acc) => acc,
        None => unreachable!("fold accumulator is restored after every step"),
    }
}

pub(crate) fn reduce<S, F>(seq: S, mut f: F) -> Option<S::Item>
where
    S: Seq,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut acc = None;
    seq.run(|item| {
        acc = Some(match acc.take() {
            Some(prev) => f(prev, item),
            None => item,
        });
        true
    });
    acc
}

pub(crate) fn count<S: Seq>(seq: S) -> Result<usize> {
    count_from(seq, 0)
}

/// Counts onwards from `start`, so that overflow can be exercised without
/// producing `usize::MAX` elements.
pub(crate) fn count_from<S: Seq>(seq: S, start: usize) -> Result<usize> {
    let mut n = start;
    let mut overflowed = false;
    seq.run(|_| match n.checked_add(1) {
        Some(next) => {
            n = next;
            true
        }
        None => {
            overflowed = true;
            false
        }
    });
    if overflowed {
        return Err(Error::overflow("count"));
    }
    Ok(n - start)
}

pub(crate) fn find<S, P>(seq: S, mut pred: P) -> Option<S::Item>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    let mut found = None;
    seq.run(|item| {
        if pred(&item) {
            found = Some(item);
            return false;
        }
        true
    });
    found
}

pub(crate) fn nth<S: Seq>(seq: S, n: usize) -> Option<S::Item> {
    let mut remaining = n;
    let mut found = None;
    seq.run(|item| {
        if remaining == 0 {
            found = Some(item);
            return false;
        }
        remaining -= 1;
        true
    });
    found
}

pub(crate) fn last<S: Seq>(seq: S) -> Option<S::Item> {
    let mut last = None;
    seq.run(|item| {
        last = Some(item);
        true
    });
    last
}

pub(crate) fn all<S, P>(seq: S, mut pred: P) -> bool
where
    S: Seq,
    P: FnMut(S::Item) -> bool,
{
    let mut holds = true;
    seq.run(|item| {
        holds = pred(item);
        holds
    });
    holds
}

pub(crate) fn any<S, P>(seq: S, mut pred: P) -> bool
where
    S: Seq,
    P: FnMut(S::Item) -> bool,
{
    let mut found = false;
    seq.run(|item| {
        found = pred(item);
        !found
    });
    found
}

pub(crate) fn for_each<S, F>(seq: S, mut f: F)
where
    S: Seq,
    F: FnMut(S::Item),
{
    seq.run(|item| {
        f(item);
        true
    });
}

pub(crate) fn collect<S, C>(seq: S) -> C
where
    S: Seq,
    C: Default + Extend<S::Item>,
{
    let mut out = C::default();
    seq.run(|item| {
        out.extend(std::iter::once(item));
        true
    });
    out
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use lazyseq_testkit::{Tally, counted, counted_naturals};

    use super::count_from;
    use crate::{SeqExt, empty, from_fn, of, range};

    #[test]
    fn test_fold() {
        assert_eq!(range(1u64, 5).fold(0, |acc, x| acc + x), 10);
        assert_eq!(empty::<u64>().fold(7, |acc, x| acc + x), 7);
        let joined = of(["a", "b"]).fold(String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "ab");
    }

    #[test]
    fn test_reduce() {
        assert_eq!(of([3, 9, 2]).reduce(i32::max), Some(9));
        assert_eq!(of([4]).reduce(|a, b| a - b), Some(4));
        assert_eq!(of([10, 3, 2]).reduce(|a, b| a - b), Some(5));
        assert_eq!(empty::<i32>().reduce(|a, b| a + b), None);
    }

    #[test]
    fn test_count() {
        assert_eq!(of([1, 2, 3]).count().unwrap(), 3);
        assert_eq!(empty::<()>().count().unwrap(), 0);
    }

    #[test]
    fn test_count_overflow() {
        let err = count_from(of([1, 2, 3]), usize::MAX - 1).unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(count_from(of([1]), usize::MAX - 1).unwrap(), 1);
    }

    #[test]
    fn test_find() {
        assert_eq!(of([1, 4, 6]).find(|x| x % 2 == 0), Some(4));
        assert_eq!(of([1, 3]).find(|x| x % 2 == 0), None);
        assert_eq!(empty::<i32>().find(|_| true), None);
    }

    #[test]
    fn test_find_stops_at_match() {
        let produced = Tally::new();
        let found = from_fn(counted_naturals(None, produced.clone())).find(|x| *x == 4);
        assert_eq!(found, Some(4));
        assert_eq!(produced.get(), 5);
    }

    #[test]
    fn test_nth() {
        assert_eq!(of(['a', 'b', 'c']).nth(0), Some('a'));
        assert_eq!(of(['a', 'b', 'c']).nth(2), Some('c'));
        assert_eq!(of(['a', 'b', 'c']).nth(3), None);
    }

    #[test]
    fn test_nth_stops_at_index() {
        let produced = Tally::new();
        let got = from_fn(counted_naturals(None, produced.clone())).nth(3);
        assert_eq!(got, Some(3));
        assert_eq!(produced.get(), 4);
    }

    #[test]
    fn test_last() {
        assert_eq!(of([1, 2, 3]).last(), Some(3));
        assert_eq!(empty::<i32>().last(), None);
    }

    #[test]
    fn test_all_any() {
        assert!(empty::<i32>().all(|_| false));
        assert!(!empty::<i32>().any(|_| true));
        assert!(of([2, 4]).all(|x| x % 2 == 0));
        assert!(!of([2, 3]).all(|x| x % 2 == 0));
        assert!(of([1, 4]).any(|x| x % 2 == 0));
        assert!(!of([1, 3]).any(|x| x % 2 == 0));
    }

    #[test]
    fn test_all_any_short_circuit() {
        let produced = Tally::new();
        assert!(!from_fn(counted(vec![2, 4, 5, 6, 8], produced.clone())).all(|x| x % 2 == 0));
        assert_eq!(produced.get(), 3);

        produced.reset();
        assert!(from_fn(counted(vec![1, 3, 4, 5], produced.clone())).any(|x| x % 2 == 0));
        assert_eq!(produced.get(), 3);
    }

    #[test]
    fn test_collect_containers() {
        let set: HashSet<i32> = of([1, 2, 2, 3]).collect();
        assert_eq!(set.len(), 3);
        let map: BTreeMap<usize, char> = of(['x', 'y']).enumerate().collect();
        assert_eq!(map.get(&1), Some(&'y'));
        let text: String = of(['h', 'i']).collect();
        assert_eq!(text, "hi");
    }

    #[test]
    fn test_for_each() {
        let mut seen = Vec::new();
        range(0u8, 3).for_each(|x| seen.push(x));
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
