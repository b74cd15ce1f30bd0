//! Sequence constructors over caller-provided data.

use std::marker::PhantomData;

use crate::seq::Seq;

/// A sequence over the elements of a collection or iterator.
///
/// Created by [`of`]. Cloning an `Of` over a collection (a `Vec`, an
/// array) gives an independent traversal of the same elements.
#[derive(Debug, Clone)]
pub struct Of<I> {
    items: I,
}

/// Returns a sequence yielding each element of `items` in order.
///
/// When `items` is an iterator, elements are pulled from it one at a time
/// as the sequence is run, and never after the consumer stops.
pub fn of<I: IntoIterator>(items: I) -> Of<I> {
    Of { items }
}

impl<I: IntoIterator> Seq for Of<I> {
    type Item = I::Item;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        for item in self.items {
            if !step(item) {
                return;
            }
        }
    }
}

/// A sequence that yields nothing. Created by [`empty`].
pub struct Empty<T>(PhantomData<fn() -> T>);

pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> std::fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn run<F>(self, _step: F)
    where
        F: FnMut(T) -> bool,
    {
    }
}

/// A sequence backed by a caller-defined producer. Created by [`from_fn`].
pub struct FromFn<F, T> {
    producer: F,
    _item: PhantomData<fn() -> T>,
}

/// Wraps a producer closure as a sequence.
///
/// The producer receives the step callback and must call it once per
/// element, returning as soon as the callback answers `false`:
///
/// ```
/// use lazyseq::{SeqExt, from_fn};
///
/// let squares = from_fn(|step: &mut dyn FnMut(u32) -> bool| {
///     for i in 1.. {
///         if !step(i * i) {
///             return;
///         }
///     }
/// });
/// let first: Vec<u32> = squares.take(4).collect();
/// assert_eq!(first, vec![1, 4, 9, 16]);
/// ```
pub fn from_fn<T, F>(producer: F) -> FromFn<F, T>
where
    F: FnOnce(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        producer,
        _item: PhantomData,
    }
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        FromFn {
            producer: self.producer.clone(),
            _item: PhantomData,
        }
    }
}

impl<T, F> Seq for FromFn<F, T>
where
    F: FnOnce(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    fn run<S>(self, mut step: S)
    where
        S: FnMut(T) -> bool,
    {
        (self.producer)(&mut step)
    }
}
