//! Composable lazy sequences driven by a push protocol.
//!
//! A [`Seq`] hands its elements, one at a time, to a stepping callback that
//! answers `true` ("give me more") or `false` ("stop now"). Combinators wrap
//! sequences into new sequences without running them; terminal consumers run
//! them to completion or to the first decisive element.
//!
//! - **Protocol**: [`Seq`] and the combinator methods of [`SeqExt`]
//! - **Sources**: [`of`], [`empty`], [`from_fn`] and the [`range`] family
//! - **Pull cursor**: [`pull`] turns a push sequence into an explicit
//!   "advance one element" cursor, which is how [`SeqExt::zip`],
//!   [`SeqExt::equal`] and [`SeqExt::compare`] walk two sequences in lockstep
//! - **Pairs**: sequences of `(K, V)` tuples get two-argument closure variants
//!   through [`PairSeqExt`]
//!
//! # Example
//!
//! ```
//! use lazyseq::{SeqExt, of, range};
//!
//! let evens: Vec<u32> = range(0u32, 10).filter(|x| x % 2 == 0).collect();
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//!
//! let cycled: Vec<i32> = of([1, 2, 3]).cycle().take(8).collect();
//! assert_eq!(cycled, vec![1, 2, 3, 1, 2, 3, 1, 2]);
//! ```
//!
//! Precondition violations (such as a zero `step_by` stride) and counter
//! overflow are reported through [`lazyseq_common::error::Error`].

pub mod adapters;
mod compare;
mod consume;
pub mod pairs;
pub mod pull;
pub mod range;
pub mod seq;
pub mod source;


pub use adapters::chain::chain_all;
pub use lazyseq_common::{Result, error::Error, error::ErrorKind};
pub use pairs::PairSeqExt;
pub use pull::{Cursor, pull};
pub use range::{range, range_by, range_from, range_from_by, range_inclusive, range_inclusive_by};
pub use seq::{Seq, SeqExt};
pub use source::{empty, from_fn, of};
