//! Pull cursors over push sequences.
//!
//! A [`Seq`] drives its consumer; sometimes the consumer needs to drive
//! instead, for example to walk two sequences side by side. [`pull`] runs a
//! sequence on a scoped helper thread that is suspended between elements and
//! hands out a [`Cursor`] whose [`advance`](Cursor::advance) resumes the
//! producer for exactly one element.
//!
//! ## Handoff
//!
//! The cursor and the producer exchange control over two bounded channels of
//! capacity 1:
//!
//! 1. `advance` sends a resume token, then blocks on the item channel
//! 2. the producer, blocked on the resume channel, wakes up, produces one
//!    element, sends it and blocks on the resume channel again
//!
//! At most one element is in flight and only one side runs at a time, so the
//! producer does exactly as much work as the pulls ask for. The producer
//! does not start before the first `advance`.
//!
//! ## Release
//!
//! Dropping the resume sender is the stop signal: the producer's pending
//! receive fails, its step callback answers `false`, and the sequence
//! unwinds on its own thread. The cursor then joins that thread. Release
//! happens once, on every exit path: explicitly through
//! [`Cursor::release`], when the producer is exhausted, or on drop (which
//! includes unwinding out of the closure passed to [`pull`]).
//!
//! A panic on the producer thread is re-raised with its original payload on
//! the thread that observes it.

use std::{
    panic,
    sync::mpsc::{self, Receiver, SyncSender},
    thread::{self, Scope, ScopedJoinHandle},
};

use crate::seq::Seq;

/// Runs `f` with a pull cursor over `seq`.
///
/// The cursor is released when `f` returns or unwinds; by the time `pull`
/// returns, the producer has stopped and performed all of its cleanup.
///
/// ```
/// use lazyseq::{of, pull};
///
/// let (first, second) = pull(of(vec![1, 2, 3]), |cursor| (cursor.advance(), cursor.advance()));
/// assert_eq!((first, second), (Some(1), Some(2)));
/// ```
pub fn pull<S, R, F>(seq: S, f: F) -> R
where
    S: Seq + Send,
    S::Item: Send,
    F: FnOnce(&mut Cursor<'_, S::Item>) -> R,
{
    thread::scope(|scope| {
        let mut cursor = Cursor::spawn(scope, seq);
        let result = f(&mut cursor);
        cursor.release();
        result
    })
}

/// An "advance one element" view of a suspended push sequence.
///
/// Created by [`pull`]. Once `advance` has returned `None` it keeps doing
/// so; the cursor is also a fused [`Iterator`].
pub struct Cursor<'scope, T> {
    /// Resume channel to the producer; `None` once released or exhausted.
    resume: Option<SyncSender<()>>,
    items: Receiver<T>,
    producer: Option<ScopedJoinHandle<'scope, ()>>,
    delivered: usize,
}

impl<'scope, T> Cursor<'scope, T> {
    fn spawn<'env, S>(scope: &'scope Scope<'scope, 'env>, seq: S) -> Self
    where
        S: Seq<Item = T> + Send + 'scope,
        T: Send + 'scope,
    {
        let (resume_tx, resume_rx) = mpsc::sync_channel::<()>(1);
        let (item_tx, item_rx) = mpsc::sync_channel::<T>(1);
        let producer = scope.spawn(move || produce(seq, resume_rx, item_tx));
        log::trace!("pull cursor spawned");
        Cursor {
            resume: Some(resume_tx),
            items: item_rx,
            producer: Some(producer),
            delivered: 0,
        }
    }

    /// Resumes the producer for one element.
    ///
    /// Returns `None` once the sequence is exhausted or the cursor has been
    /// released.
    pub fn advance(&mut self) -> Option<T> {
        let resume = self.resume.as_ref()?;
        // A failed send means the producer has already returned; the receive
        // below observes the closed item channel.
        let _ = resume.send(());
        match self.items.recv() {
            Ok(item) => {
                self.delivered += 1;
                Some(item)
            }
            Err(_) => {
                log::trace!("pull cursor exhausted after {} items", self.delivered);
                self.finish();
                None
            }
        }
    }

    /// Stops the producer and waits for it to unwind. Idempotent.
    pub fn release(&mut self) {
        if self.producer.is_some() {
            log::trace!("pull cursor released after {} items", self.delivered);
        }
        self.finish();
    }

    /// Number of elements handed out so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// `true` once the cursor can no longer yield elements.
    pub fn is_finished(&self) -> bool {
        self.resume.is_none()
    }

    fn finish(&mut self) {
        self.resume = None;
        let Some(producer) = self.producer.take() else {
            return;
        };
        if let Err(payload) = producer.join() {
            log::debug!("pull cursor producer panicked; propagating");
            if !thread::panicking() {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl<T> Iterator for Cursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance()
    }
}

impl<T> std::iter::FusedIterator for Cursor<'_, T> {}

impl<T> Drop for Cursor<'_, T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> std::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("delivered", &self.delivered)
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Producer thread body.
fn produce<S: Seq>(seq: S, resume: Receiver<()>, items: SyncSender<S::Item>) {
    if resume.recv().is_err() {
        // Released before the first pull.
        return;
    }
    let mut released = false;
    seq.run(|item| {
        if released {
            return false;
        }
        if items.send(item).is_ok() && resume.recv().is_ok() {
            true
        } else {
            released = true;
            false
        }
    });
}
