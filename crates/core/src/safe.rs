//! Adapters from panicking code to [`Outcome`].
//!
//! Anything sourced from outside a chain that can panic goes through one of
//! these before it joins the chain. Only unwinding panics are intercepted;
//! with `panic = "abort"`, on allocation failure, or on `process::exit`
//! the process goes down as usual.
//!
//! The process-wide panic hook is left alone, so the default hook still
//! prints the panic message to stderr before it is turned into a `Failure`.

use std::panic::{self, AssertUnwindSafe};

use crate::error::Caught;
use crate::outcome::Outcome::{self, Failure, Success};

/// Run `f` once, turning a panic into `Failure(Caught)`.
///
/// ```
/// use outcome_core::{catch, Success};
///
/// assert_eq!(catch(|| 10 / 2), Success(5));
///
/// let zero = std::hint::black_box(0);
/// assert!(catch(|| 10 / zero).is_failure());
/// ```
pub fn catch<A, F>(f: F) -> Outcome<A, Caught>
where
    F: FnOnce() -> A,
{
    // `f` is consumed here. State it shares with the caller is not, and may
    // be left half-updated by the unwind.
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(answer) => Success(answer),
        Err(payload) => Failure(Caught::from_payload(payload)),
    }
}

/// Wrap a panicking function into one that returns an [`Outcome`].
///
/// Functions of several arguments take them as a tuple.
///
/// The returned closure reuses `f` for every call. If `f` mutates captured
/// state such as a `Cell` and panics part-way, the next call sees that
/// state as the panicked call left it.
///
/// ```
/// use outcome_core::safe;
///
/// let divide = safe(|(a, b): (i32, i32)| a / b);
/// assert_eq!(divide((10, 2)).unwrap(), 5);
/// assert_eq!(
///     divide((10, 0)).unwrap_failure().message(),
///     "attempt to divide by zero"
/// );
/// ```
pub fn safe<T, A, F>(f: F) -> impl Fn(T) -> Outcome<A, Caught>
where
    F: Fn(T) -> A,
{
    move |input| catch(|| f(input))
}

/// Wrap a function that reports failure through both `Err` and panics.
///
/// Both channels end up in the same error type: `Err(e)` becomes
/// `Failure(e)`, a panic becomes `Failure(E::from(caught))`.
///
/// Like [`safe`], `f` is shared across calls, so captured state touched
/// by a panicking call stays as it was left.
pub fn adapt<T, A, E, F>(f: F) -> impl Fn(T) -> Outcome<A, E>
where
    F: Fn(T) -> Result<A, E>,
    E: From<Caught>,
{
    move |input| match catch(|| f(input)) {
        Success(Ok(answer)) => Success(answer),
        Success(Err(error)) => Failure(error),
        Failure(caught) => Failure(E::from(caught)),
    }
}
