//! Core definitions shared by all lazyseq-* crates: the error type and the
//! argument verification helpers.

pub mod error;
pub mod result;

pub use result::Result;
