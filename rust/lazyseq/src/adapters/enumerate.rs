use crate::seq::Seq;

/// Pairs each upstream element with a zero-based index.
///
/// The index never wraps: after the element at `usize::MAX` the adapter
/// stops upstream.
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    seq: S,
    start: usize,
}

impl<S> Enumerate<S> {
    pub fn new(seq: S) -> Self {
        Self::starting_at(seq, 0)
    }

    pub(crate) fn starting_at(seq: S, start: usize) -> Self {
        Enumerate { seq, start }
    }
}

impl<S: Seq> Seq for Enumerate<S> {
    type Item = (usize, S::Item);

    fn run<F>(self, mut step: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut index = self.start;
        self.seq.run(|item| {
            if !step((index, item)) {
                return false;
            }
            match index.checked_add(1) {
                Some(next) => {
                    index = next;
                    true
                }
                None => false,
            }
        });
    }
}
