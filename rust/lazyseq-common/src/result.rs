//! Result alias and argument checks for combinator constructors.
//!
//! A failed check becomes [`ErrorKind::InvalidArgument`] carrying the
//! argument name and the condition it violated, as written at the call site.

use crate::error::{Error, ErrorKind};

pub type Result<T> = std::result::Result<T, Error>;

/// Returns early with an invalid-argument error unless `$expr` holds.
///
/// ```
/// use lazyseq_common::{Result, verify_arg};
///
/// fn stride(n: usize) -> Result<usize> {
///     verify_arg!(n, n > 0);
///     Ok(n)
/// }
///
/// assert!(stride(0).unwrap_err().is_invalid_arg());
/// ```
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let holds = $expr;
        $crate::result::verify_arg(holds, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(holds: bool, name: &str, condition: &str) -> Result<()> {
    if holds {
        return Ok(());
    }
    Err(rejected(name, condition))
}

#[cold]
fn rejected(name: &str, condition: &str) -> Error {
    ErrorKind::InvalidArgument {
        name: name.to_owned(),
        message: condition.to_owned(),
    }
    .into()
}
