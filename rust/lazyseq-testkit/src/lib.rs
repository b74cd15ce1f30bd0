//! Test utilities for the lazyseq crates.
//!
//! This crate provides:
//! - Shared counters for observing how many elements a producer emitted
//! - Producer closures that report every element they produce and whether
//!   they were asked to stop
//! - Seeded random data for property-style tests
//!
//! Producers are plain closures of the shape
//! `FnOnce(&mut dyn FnMut(T) -> bool)`, which is what `lazyseq::from_fn`
//! accepts, so this crate does not depend on `lazyseq` itself.

pub mod data_gen;
pub mod producers;
pub mod tally;

pub use data_gen::DataGen;
pub use producers::{StopProbe, counted, counted_naturals, probed};
pub use tally::Tally;
