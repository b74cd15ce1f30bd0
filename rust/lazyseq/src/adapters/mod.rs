//! Sequence adapters.
//!
//! Each adapter wraps one upstream sequence (two for [`chain::Chain`] and
//! [`zip::Zip`]) and forwards, drops, or transforms its elements while
//! keeping the push protocol intact: a `false` from downstream is passed
//! straight back upstream, and no adapter asks upstream for an element it
//! does not need to answer downstream.
//!
//! The adapters are normally constructed through the methods of
//! [`SeqExt`](crate::SeqExt).

pub mod chain;
pub mod cycle;
pub mod enumerate;
pub mod filter;
pub mod flatten;
pub mod intersperse;
pub mod map;
pub mod skip;
pub mod step_by;
pub mod take;
pub mod zip;
