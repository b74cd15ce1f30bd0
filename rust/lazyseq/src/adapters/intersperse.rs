use crate::seq::Seq;

/// Yields the upstream elements with a separator between each adjacent pair.
///
/// The first element is forwarded as is; every later element is preceded by
/// a clone of the separator. Nothing trails the last element, and upstream is
/// only asked for an element once downstream wants the separator before it.
#[derive(Debug, Clone)]
pub struct Intersperse<S, T> {
    seq: S,
    sep: T,
}

impl<S, T> Intersperse<S, T> {
    pub fn new(seq: S, sep: T) -> Self {
        Intersperse { seq, sep }
    }
}

impl<S, T> Seq for Intersperse<S, T>
where
    S: Seq<Item = T>,
    T: Clone,
{
    type Item = T;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(T) -> bool,
    {
        let Intersperse { seq, sep } = self;
        let mut first = true;
        seq.run(|item| {
            if first {
                first = false;
                return step(item);
            }
            step(sep.clone()) && step(item)
        });
    }
}
