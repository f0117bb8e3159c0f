//! Joining several independent outcomes into one.
//!
//! Every form here is fail-fast: inputs are inspected left to right and the
//! first `Failure` is returned as-is. Later failures are never reported, and
//! with [`combine!`] or an iterator, later inputs are never even produced.
//! No error-collecting mode exists.

use crate::outcome::Outcome::{self, Failure, Success};

/// Combine lazily evaluated outcomes, stopping at the first failure.
///
/// Each `name = expr` binding is evaluated in order. When `expr` yields
/// `Failure(e)` the macro evaluates to `Failure(e)` and none of the later
/// expressions run. When every binding succeeds, the answers are bound to
/// their names and the macro evaluates to `Success(body)`.
///
/// ```
/// use outcome_core::{combine, Failure, Outcome, Success};
///
/// let total: Outcome<i32, &str> = combine!(
///     a = Success(2),
///     b = Success(3),
///     c = Success(4)
///     => a + b + c
/// );
/// assert_eq!(total, Success(9));
///
/// let failed: Outcome<i32, &str> = combine!(
///     a = Success(2),
///     b = Failure::<i32, _>("second"),
///     c = unreachable_input()
///     => a + b + c
/// );
/// assert_eq!(failed, Failure("second"));
///
/// fn unreachable_input() -> Outcome<i32, &'static str> {
///     Failure("never evaluated")
/// }
/// ```
#[macro_export]
macro_rules! combine {
    ($($name:ident = $input:expr),+ $(,)? => $body:expr) => {
        'combine: {
            $(
                let $name = match $input {
                    $crate::Outcome::Success(answer) => answer,
                    $crate::Outcome::Failure(error) => {
                        break 'combine $crate::Outcome::Failure(error);
                    }
                };
            )+
            $crate::Outcome::Success($body)
        }
    };
}

/// Fail-fast combination of a tuple of already-produced outcomes.
///
/// Implemented for tuples of one to eight outcomes sharing an error type.
///
/// ```
/// use outcome_core::{Combine, Failure, Outcome, Success};
///
/// let inputs: (Outcome<i32, &str>, Outcome<i32, &str>, Outcome<i32, &str>) =
///     (Success(2), Success(3), Success(4));
/// assert_eq!(inputs.combine(|(a, b, c)| a + b + c), Success(9));
///
/// let inputs: (Outcome<i32, &str>, Outcome<i32, &str>) = (Failure("first"), Failure("second"));
/// assert_eq!(inputs.zip(), Failure("first"));
/// ```
pub trait Combine<E> {
    /// The tuple of answers when every input succeeded.
    type Answers;

    /// Collect every answer into a tuple, or return the first failure.
    fn zip(self) -> Outcome<Self::Answers, E>;

    /// Apply `f` to the answers, or return the first failure.
    fn combine<B, F>(self, f: F) -> Outcome<B, E>
    where
        Self: Sized,
        F: FnOnce(Self::Answers) -> B,
    {
        self.zip().map(f)
    }
}

macro_rules! impl_combine {
    ($($answer:ident => $input:ident),+) => {
        impl<E, $($answer),+> Combine<E> for ($(Outcome<$answer, E>,)+) {
            type Answers = ($($answer,)+);

            fn zip(self) -> Outcome<Self::Answers, E> {
                let ($($input,)+) = self;
                $(
                    let $input = match $input {
                        Success(answer) => answer,
                        Failure(error) => return Failure(error),
                    };
                )+
                Success(($($input,)+))
            }
        }
    };
}

impl_combine!(A1 => a1);
impl_combine!(A1 => a1, A2 => a2);
impl_combine!(A1 => a1, A2 => a2, A3 => a3);
impl_combine!(A1 => a1, A2 => a2, A3 => a3, A4 => a4);
impl_combine!(A1 => a1, A2 => a2, A3 => a3, A4 => a4, A5 => a5);
impl_combine!(A1 => a1, A2 => a2, A3 => a3, A4 => a4, A5 => a5, A6 => a6);
impl_combine!(A1 => a1, A2 => a2, A3 => a3, A4 => a4, A5 => a5, A6 => a6, A7 => a7);
impl_combine!(A1 => a1, A2 => a2, A3 => a3, A4 => a4, A5 => a5, A6 => a6, A7 => a7, A8 => a8);

/// Collect an iterator of outcomes, stopping at the first failure.
///
/// Items after the first `Failure` are not pulled from the iterator, so a
/// lazily mapped source never computes them.
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut first_failure = None;
        let answers: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Success(answer) => Some(answer),
                Failure(error) => {
                    first_failure = Some(error);
                    None
                }
            })
            .collect();

        match first_failure {
            Some(error) => Failure(error),
            None => Success(answers),
        }
    }
}
