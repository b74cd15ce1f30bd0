use crate::seq::Seq;

/// Repeats a buffered copy of a source sequence forever.
///
/// The source is drained into the buffer when the `Cycle` is created and is
/// never touched again. An empty buffer yields nothing, so cycling an empty
/// source is an empty sequence rather than an endless loop.
#[derive(Debug, Clone)]
pub struct Cycle<T> {
    items: Vec<T>,
}

impl<T: Clone> Cycle<T> {
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T>,
    {
        let mut items = Vec::new();
        seq.run(|item| {
            items.push(item);
            true
        });
        log::debug!("cycle buffered {} items", items.len());
        Cycle { items }
    }

    /// The buffered elements, in source order.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Seq for Cycle<T> {
    type Item = T;

    fn run<F>(self, mut step: F)
    where
        F: FnMut(T) -> bool,
    {
        if self.items.is_empty() {
            return;
        }
        loop {
            for item in &self.items {
                if !step(item.clone()) {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lazyseq_testkit::{StopProbe, probed};

    use crate::{SeqExt, empty, from_fn, of};

    #[test]
    fn test_cycle_take() {
        let got: Vec<i32> = of([1, 2, 3]).cycle().take(8).collect();
        assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_cycle_empty() {
        assert_eq!(empty::<u8>().cycle().count().unwrap(), 0);
    }

    #[test]
    fn test_cycle_drains_source_once() {
        let probe = StopProbe::new();
        let cycle = from_fn(probed(vec!['x', 'y'], &probe)).cycle();
        assert!(probe.exhausted());
        assert_eq!(probe.produced(), 2);
        assert_eq!(cycle.items(), &['x', 'y']);

        let got: String = cycle.clone().take(5).collect();
        assert_eq!(got, "xyxyx");
        let got: String = cycle.take(3).collect();
        assert_eq!(got, "xyx");
        assert_eq!(probe.produced(), 2);
    }
}
