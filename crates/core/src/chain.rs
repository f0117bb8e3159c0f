//! Sequencing combinators for [`Outcome`].
//!
//! `map` and `bind` are the two primitives. A chain such as
//! `r.bind(f1).bind(f2).map(g)` runs each step only while every earlier
//! step succeeded; the first `Failure` is carried, unchanged, to the end.

use std::future::Future;

use crate::outcome::Outcome::{self, Failure, Success};

impl<A, E> Outcome<A, E> {
    /// Transform the answer, leaving a failure untouched.
    ///
    /// `f` is never called on `Failure`.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Success(answer) => Success(f(answer)),
            Failure(error) => Failure(error),
        }
    }

    /// Sequence a fallible step.
    ///
    /// On `Success(a)` this returns `f(a)` as-is; on `Failure(e)` it returns
    /// `Failure(e)` without calling `f`.
    #[inline]
    pub fn bind<B, F>(self, f: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Outcome<B, E>,
    {
        match self {
            Success(answer) => f(answer),
            Failure(error) => Failure(error),
        }
    }

    /// Sequence a step whose error type is wider than this one.
    ///
    /// A prior failure is converted with `Into`, so a chain settles on a
    /// single error enum that every step's error converts into.
    ///
    /// ```
    /// use outcome_core::{Failure, Outcome, Success};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum StepError {
    ///     Parse(String),
    ///     Negative(i64),
    /// }
    ///
    /// impl From<String> for StepError {
    ///     fn from(reason: String) -> Self {
    ///         Self::Parse(reason)
    ///     }
    /// }
    ///
    /// let parsed: Outcome<i64, String> = Failure("not a number".to_string());
    /// let checked = parsed.bind_into(|n| {
    ///     if n < 0 { Failure(StepError::Negative(n)) } else { Success(n) }
    /// });
    /// assert_eq!(checked, Failure(StepError::Parse("not a number".to_string())));
    /// ```
    #[inline]
    pub fn bind_into<B, E2, F>(self, f: F) -> Outcome<B, E2>
    where
        E: Into<E2>,
        F: FnOnce(A) -> Outcome<B, E2>,
    {
        match self {
            Success(answer) => f(answer),
            Failure(error) => Failure(error.into()),
        }
    }

    /// Convert the error into a wider type through `Into`.
    #[inline]
    pub fn widen<E2>(self) -> Outcome<A, E2>
    where
        E: Into<E2>,
    {
        self.map_failure(Into::into)
    }

    /// Transform the error, leaving an answer untouched.
    #[inline]
    pub fn map_failure<E2, F>(self, f: F) -> Outcome<A, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Success(answer) => Success(answer),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Map both payloads in one step.
    #[inline]
    pub fn bimap<B, E2, F, G>(self, on_success: F, on_failure: G) -> Outcome<B, E2>
    where
        F: FnOnce(A) -> B,
        G: FnOnce(E) -> E2,
    {
        match self {
            Success(answer) => Success(on_success(answer)),
            Failure(error) => Failure(on_failure(error)),
        }
    }

    /// Explicit recovery: run `f` on the error, pass an answer through.
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<A, E2>
    where
        F: FnOnce(E) -> Outcome<A, E2>,
    {
        match self {
            Success(answer) => Success(answer),
            Failure(error) => f(error),
        }
    }

    /// Observe the answer without consuming the outcome.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Success(ref answer) = self {
            f(answer);
        }
        self
    }

    /// Observe the error without consuming the outcome.
    #[inline]
    pub fn tap_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(ref error) = self {
            f(error);
        }
        self
    }

    /// [`Outcome::bind`] for a step that is a future.
    ///
    /// The chain resumes only once the future has resolved. Blocking,
    /// suspension and cancellation all belong to that future.
    pub async fn bind_async<B, F, Fut>(self, f: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = Outcome<B, E>>,
    {
        match self {
            Success(answer) => f(answer).await,
            Failure(error) => Failure(error),
        }
    }

    /// [`Outcome::map`] for an asynchronous transformation.
    pub async fn map_async<B, F, Fut>(self, f: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        match self {
            Success(answer) => Success(f(answer).await),
            Failure(error) => Failure(error),
        }
    }
}

/// Free-function form of [`Outcome::map`].
#[inline]
pub fn map<A, B, E, F>(outcome: Outcome<A, E>, f: F) -> Outcome<B, E>
where
    F: FnOnce(A) -> B,
{
    outcome.map(f)
}

/// Free-function form of [`Outcome::bind`].
#[inline]
pub fn bind<A, B, E, F>(outcome: Outcome<A, E>, f: F) -> Outcome<B, E>
where
    F: FnOnce(A) -> Outcome<B, E>,
{
    outcome.bind(f)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use std::cell::Cell;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Wide {
        Narrow(&'static str),
        Other,
    }

    impl From<&'static str> for Wide {
        fn from(reason: &'static str) -> Self {
            Self::Narrow(reason)
        }
    }

    #[test]
    fn test_map_success() {
        let result: Outcome<i32, &str> = Success(21);
        assert_eq!(result.map(|v| v * 2), Success(42));
    }

    #[test]
    fn test_map_skips_failure() {
        let calls = Cell::new(0);
        let result: Outcome<i32, &str> = Failure("fa(1)");
        let mapped = result.map(|v| {
            calls.set(calls.get() + 1);
            v * 2
        });
        assert_eq!(mapped, Failure("fa(1)"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_bind_returns_step_outcome_unwrapped() {
        let result: Outcome<i32, &str> = Success(21);
        assert_eq!(result.bind(|v| Success(v * 2)), Success(42));
        assert_eq!(result.bind(|_| Failure::<i32, _>("failed")), Failure("failed"));
    }

    #[test]
    fn test_bind_short_circuits_chain() {
        let calls = Cell::new(0);
        let step = |v: i32| {
            calls.set(calls.get() + 1);
            Success::<i32, &str>(v + 1)
        };

        let result = Success::<i32, &str>(0)
            .bind(step)
            .bind(|_| Failure("second"))
            .bind(step)
            .bind(step);

        assert_eq!(result, Failure("second"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_bind_into_widens_prior_failure() {
        let result: Outcome<i32, &'static str> = Failure("narrow");
        let widened = result.bind_into(|v| Success::<i32, Wide>(v + 1));
        assert_eq!(widened, Failure(Wide::Narrow("narrow")));
    }

    #[test]
    fn test_bind_into_runs_step_on_success() {
        let result: Outcome<i32, &'static str> = Success(1);
        let widened = result.bind_into(|_| Failure::<i32, Wide>(Wide::Other));
        assert_eq!(widened, Failure(Wide::Other));
    }

    #[test]
    fn test_widen() {
        let narrow: Outcome<i32, &'static str> = Failure("narrow");
        assert_eq!(narrow.widen::<Wide>(), Failure(Wide::Narrow("narrow")));
        assert_eq!(Success::<i32, &'static str>(2).widen::<Wide>(), Success(2));
    }

    #[test]
    fn test_map_failure_and_bimap() {
        let bad: Outcome<i32, &str> = Failure("hello");
        assert_eq!(bad.map_failure(str::len), Failure(5));
        assert_eq!(bad.bimap(|v| v * 2, str::len), Failure(5));

        let ok: Outcome<i32, &str> = Success(21);
        assert_eq!(ok.bimap(|v| v * 2, str::len), Success(42));
    }

    #[test]
    fn test_or_else_recovers() {
        let bad: Outcome<i32, &str> = Failure("missing");
        let recovered: Outcome<i32, ()> = bad.or_else(|_| Success(0));
        assert_eq!(recovered, Success(0));
    }

    #[test]
    fn test_tap_only_on_success() {
        let mut observed = 0;
        let _ = Success::<i32, &str>(42).tap(|v| observed = *v);
        assert_eq!(observed, 42);

        let mut tapped = false;
        let _ = Failure::<i32, &str>("error").tap(|_| tapped = true);
        assert!(!tapped);
    }

    #[test]
    fn test_tap_failure_only_on_failure() {
        let mut observed = String::new();
        let _ = Failure::<i32, &str>("error").tap_failure(|e| observed = (*e).to_string());
        assert_eq!(observed, "error");

        let mut tapped = false;
        let _ = Success::<i32, &str>(1).tap_failure(|_| tapped = true);
        assert!(!tapped);
    }

    #[test]
    fn test_free_functions_match_methods() {
        let ok: Outcome<i32, &str> = Success(3);
        assert_eq!(map(ok, |v| v + 1), ok.map(|v| v + 1));
        assert_eq!(bind(ok, |v| Success(v + 1)), ok.bind(|v| Success(v + 1)));
    }

    #[test]
    fn test_pipeline() {
        let result: Outcome<i32, &str> = Success(10)
            .map(|v| v + 5)
            .tap(|v| assert_eq!(*v, 15))
            .bind(|v| Success(v * 2))
            .tap(|v| assert_eq!(*v, 30));

        assert_eq!(result, Success(30));
    }

    #[tokio::test]
    async fn test_bind_async() {
        let result: Outcome<i32, &str> = Success(21);
        let bound = result.bind_async(|v| async move { Success(v * 2) }).await;
        assert_eq!(bound, Success(42));
    }

    #[tokio::test]
    async fn test_map_async() {
        let result: Outcome<i32, &str> = Success(21);
        let mapped = result.map_async(|v| async move { v * 2 }).await;
        assert_eq!(mapped, Success(42));
    }

    #[tokio::test]
    async fn test_map_async_skips_failure() {
        let calls = Cell::new(0);
        let result: Outcome<i32, &str> = Failure("fa(1)");
        let mapped = result
            .map_async(|v| {
                calls.set(calls.get() + 1);
                async move { v * 2 }
            })
            .await;
        assert_eq!(mapped, Failure("fa(1)"));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_bind_async_propagates_failure() {
        let result: Outcome<i32, &str> = Failure("initial error");
        let bound = result.bind_async(|v| async move { Success(v * 2) }).await;
        assert_eq!(bound, Failure("initial error"));
    }
}
