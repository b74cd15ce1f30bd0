//! Algebraic properties checked against `std` iterator and `itertools`
//! oracles over seeded random inputs.

use std::cmp::Ordering;

use itertools::Itertools;
use lazyseq::{Seq, SeqExt, empty, from_fn, of, range, range_by, range_inclusive_by};
use lazyseq_testkit::{DataGen, Tally, counted};

const ROUNDS: usize = 200;

fn to_vec<S: Seq>(seq: S) -> Vec<S::Item> {
    seq.collect()
}

#[test]
fn adapters_match_iterator_oracles() {
    let mut data = DataGen::with_seed(0x5eed);
    for _ in 0..ROUNDS {
        let values = data.values(40, 50);
        let n = data.usize(0..45);

        assert_eq!(
            to_vec(of(values.clone()).map(|x| x * 3)),
            values.iter().map(|x| x * 3).collect_vec()
        );
        assert_eq!(
            to_vec(of(values.clone()).filter(|x| x % 2 == 1)),
            values.iter().copied().filter(|x| x % 2 == 1).collect_vec()
        );
        assert_eq!(
            to_vec(of(values.clone()).take(n)),
            values.iter().copied().take(n).collect_vec()
        );
        assert_eq!(
            to_vec(of(values.clone()).skip(n)),
            values.iter().copied().skip(n).collect_vec()
        );
        assert_eq!(
            to_vec(of(values.clone()).take_while(|x| *x < 40)),
            values.iter().copied().take_while(|x| *x < 40).collect_vec()
        );
        assert_eq!(
            to_vec(of(values.clone()).skip_while(|x| *x < 40)),
            values.iter().copied().skip_while(|x| *x < 40).collect_vec()
        );
        assert_eq!(
            to_vec(of(values.clone()).enumerate()),
            values.iter().copied().enumerate().collect_vec()
        );
        assert_eq!(
            to_vec(of(values.clone()).intersperse(999)),
            Itertools::intersperse(values.iter().copied(), 999).collect_vec()
        );
        let stride = n + 1;
        assert_eq!(
            to_vec(of(values.clone()).step_by(stride).unwrap()),
            values.iter().copied().step_by(stride).collect_vec()
        );
    }
}

#[test]
fn consumers_match_iterator_oracles() {
    let mut data = DataGen::with_seed(17);
    for _ in 0..ROUNDS {
        let values = data.values(30, 20);
        let n = data.usize(0..35);

        assert_eq!(of(values.clone()).count().unwrap(), values.len());
        assert_eq!(
            of(values.clone()).fold(0u64, |acc, x| acc + u64::from(x)),
            values.iter().map(|&x| u64::from(x)).sum::<u64>()
        );
        assert_eq!(of(values.clone()).reduce(u32::max), values.iter().copied().max());
        assert_eq!(of(values.clone()).last(), values.last().copied());
        assert_eq!(of(values.clone()).nth(n), values.get(n).copied());
        assert_eq!(
            of(values.clone()).find(|x| *x > 15),
            values.iter().copied().find(|x| *x > 15)
        );
        assert_eq!(of(values.clone()).all(|x| x < 19), values.iter().all(|&x| x < 19));
        assert_eq!(of(values.clone()).any(|x| x == 0), values.contains(&0));
    }
}

#[test]
fn chain_and_flatten_concatenate() {
    let mut data = DataGen::with_seed(99);
    for _ in 0..ROUNDS {
        let parts = (0..data.usize(0..5)).map(|_| data.values(6, 10)).collect_vec();
        let expected = parts.iter().flatten().copied().collect_vec();

        let flat = to_vec(of(parts.clone()).map(of).flatten());
        assert_eq!(flat, expected);
        let chained = to_vec(lazyseq::chain_all(parts.iter().cloned().map(of)));
        assert_eq!(chained, expected);
        if let [a, b, ..] = parts.as_slice() {
            let two = to_vec(of(a.clone()).chain(of(b.clone())));
            assert_eq!(two, a.iter().chain(b).copied().collect_vec());
        }
    }
}

#[test]
fn take_after_skip_is_a_window() {
    let mut data = DataGen::with_seed(3);
    for _ in 0..ROUNDS {
        let values = data.values(40, 100);
        let (a, b) = (data.usize(0..45), data.usize(0..45));
        let window = to_vec(of(values.clone()).skip(a).take(b));
        let start = a.min(values.len());
        let end = (a + b).min(values.len());
        assert_eq!(window, values[start..end].to_vec());
    }
}

#[test]
fn zip_length_is_minimum() {
    let mut data = DataGen::with_seed(4);
    for _ in 0..ROUNDS {
        let (a, b) = (data.values(20, 5), data.values(20, 5));
        let zipped = to_vec(of(a.clone()).zip(of(b.clone())));
        assert_eq!(zipped.len(), a.len().min(b.len()));
        assert_eq!(zipped, a.iter().copied().zip(b.iter().copied()).collect_vec());
    }
}

#[test]
fn compare_is_lexicographic() {
    let mut data = DataGen::with_seed(5);
    for _ in 0..ROUNDS {
        let (a, b) = data.related_pair(12, 3);
        let forward = of(a.clone()).compare(of(b.clone()));
        let backward = of(b.clone()).compare(of(a.clone()));
        assert_eq!(forward, a.cmp(&b));
        assert_eq!(forward, backward.reverse());
        assert_eq!(of(a.clone()).compare(of(a.clone())), Ordering::Equal);
        assert_eq!(of(a.clone()).equal(of(b.clone())), a == b);
    }
}

#[test]
fn equal_consumption_matches_common_prefix() {
    let mut data = DataGen::with_seed(6);
    for _ in 0..ROUNDS {
        let (a, b) = data.related_pair(12, 3);
        let left = Tally::new();
        let right = Tally::new();
        let equal = from_fn(counted(a.clone(), left.clone()))
            .equal(from_fn(counted(b.clone(), right.clone())));
        assert_eq!(equal, a == b);

        let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
        let (expected_left, expected_right) = match (prefix < a.len(), prefix < b.len()) {
            // Mismatching pair: both sides produced it.
            (true, true) => (prefix + 1, prefix + 1),
            // Right ended first: one extra left element, no further pulls.
            (true, false) => (prefix + 1, prefix),
            // Left ended first (or both): the right side is probed once.
            (false, true) => (prefix, prefix + 1),
            (false, false) => (prefix, prefix),
        };
        assert_eq!(left.get(), expected_left, "{a:?} vs {b:?}");
        assert_eq!(right.get(), expected_right, "{a:?} vs {b:?}");
    }
}

#[test]
fn empty_laws() {
    assert!(to_vec(empty::<u32>().map(|x| x + 1)).is_empty());
    assert!(to_vec(empty::<u32>().filter(|_| true)).is_empty());
    assert!(to_vec(empty::<u32>().take(5)).is_empty());
    assert!(to_vec(empty::<u32>().skip(5)).is_empty());
    assert!(to_vec(empty::<u32>().intersperse(0)).is_empty());
    assert!(to_vec(empty::<u32>().cycle().take(3)).is_empty());
    assert!(to_vec(empty::<u32>().zip(of([1, 2]))).is_empty());
    assert!(to_vec(of([1, 2]).zip(empty::<u32>())).is_empty());
    assert!(empty::<u32>().all(|_| false));
    assert!(!empty::<u32>().any(|_| true));
    assert_eq!(empty::<u32>().fold(42, |acc, x| acc + x), 42);
}

#[test]
fn adapters_are_lazy() {
    let produced = Tally::new();
    let pipeline = from_fn(counted(vec![1, 2, 3], produced.clone()))
        .map(|x| x + 1)
        .filter(|x| x % 2 == 0)
        .enumerate()
        .skip(1)
        .take(1);
    assert_eq!(produced.get(), 0);
    assert_eq!(to_vec(pipeline), vec![(1, 4)]);
    assert_eq!(produced.get(), 3);
}

#[test]
fn ranges_match_std_ranges() {
    let mut data = DataGen::with_seed(8);
    for _ in 0..ROUNDS {
        let start = data.usize(0..40) as i64 - 20;
        let end = data.usize(0..40) as i64 - 20;
        let step = data.usize(1..6) as i64;
        assert_eq!(
            to_vec(range_by(start, end, step)),
            (start..end).step_by(step as usize).collect_vec()
        );
        assert_eq!(
            to_vec(range_by(start, end, -step)),
            (end + 1..=start).rev().step_by(step as usize).collect_vec()
        );
        assert_eq!(
            to_vec(range_inclusive_by(start, end, step)),
            (start..=end).step_by(step as usize).collect_vec()
        );
    }
    assert_eq!(to_vec(range(250u8, 255)), vec![250, 251, 252, 253, 254]);
}
