//! The two-variant outcome type.
//!
//! An [`Outcome`] is returned by a fallible operation instead of panicking.
//! It is never mutated after construction: every method takes `self` (or
//! `&self`) and hands back a new value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Either the answer of a fallible operation or the reason it has none.
///
/// Match on it exhaustively to handle both cases; that is the type-checked
/// way to get at the payload. [`Outcome::unwrap`] exists for tests and for
/// code that has already proven success, and panics otherwise.
///
/// # Examples
///
/// ```
/// use outcome_core::{Failure, Outcome, Success};
///
/// fn halve(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Success(n / 2)
///     } else {
///         Failure(format!("{n} is odd"))
///     }
/// }
///
/// match halve(7) {
///     Success(half) => println!("half: {half}"),
///     Failure(reason) => println!("no half: {reason}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<A, E> {
    /// The operation produced a valid answer.
    Success(A),
    /// The operation could not produce an answer.
    Failure(E),
}

impl<A, E> Outcome<A, E> {
    /// Returns `true` for `Success`.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the answer, if there is one.
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> Option<&A> {
        match self {
            Self::Success(answer) => Some(answer),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the error, if there is one.
    #[inline]
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrow both payloads, leaving `self` untouched.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&A, &E> {
        match self {
            Self::Success(answer) => Outcome::Success(answer),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Take the answer out of a `Success`.
    ///
    /// # Panics
    ///
    /// Panics on `Failure`. That is a contract violation by the caller, not
    /// a recoverable condition; match on the outcome or use
    /// [`Outcome::into_result`] when failure is possible.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> A
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(answer) => answer,
            Self::Failure(error) => {
                contract_violation("called `Outcome::unwrap()` on a `Failure` value", &error)
            }
        }
    }

    /// Take the error out of a `Failure`.
    ///
    /// # Panics
    ///
    /// Panics on `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        A: fmt::Debug,
    {
        match self {
            Self::Success(answer) => contract_violation(
                "called `Outcome::unwrap_failure()` on a `Success` value",
                &answer,
            ),
            Self::Failure(error) => error,
        }
    }

    /// The answer, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Success(answer) => answer,
            Self::Failure(_) => default,
        }
    }

    /// The answer, or a value computed from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Success(answer) => answer,
            Self::Failure(error) => f(error),
        }
    }

    /// Convert into a std `Result`, so `?` can be used at a boundary.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Success(answer) => Ok(answer),
            Self::Failure(error) => Err(error),
        }
    }

    /// Discard the error.
    #[inline]
    pub fn into_answer(self) -> Option<A> {
        match self {
            Self::Success(answer) => Some(answer),
            Self::Failure(_) => None,
        }
    }

    /// Discard the answer.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
#[allow(clippy::panic)]
fn contract_violation(msg: &str, payload: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {payload:?}")
}

impl<A, E> From<Result<A, E>> for Outcome<A, E> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(answer) => Self::Success(answer),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A, E> From<Outcome<A, E>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<A, E>) -> Self {
        outcome.into_result()
    }
}

impl<A: fmt::Display, E: fmt::Display> fmt::Display for Outcome<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(answer) => write!(f, "Success({answer})"),
            Self::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
