//! # outcome-core
//!
//! Exception-free result propagation: a two-variant [`Outcome`] and the
//! combinators that chain fallible steps while keeping the first failure.
//!
//! ## Laws
//!
//! For any `x`, `e`, and well-behaved steps `f`, `g`:
//!
//! - `Success(x).bind(f) == f(x)`
//! - `r.bind(Success) == r`
//! - `r.bind(f).bind(g) == r.bind(|x| f(x).bind(g))`
//! - `Failure(e).bind(f) == Failure(e)`, and `f` is never called
//! - `r.map(|x| x) == r`
//!
//! ## Error Handling
//!
//! - Producers return `Outcome<A, E>` instead of panicking.
//! - Code that may panic is wrapped with [`safe`], [`catch`] or [`adapt`].
//! - Steps with different error types share one enum; [`Outcome::bind_into`]
//!   widens earlier failures through `From`.
//! - Exactly one [`Boundary`] turns the final outcome into output and an
//!   exit code.
//!
//! ```
//! use outcome_core::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! fn reciprocal(n: i32) -> Outcome<f64, String> {
//!     if n == 0 {
//!         Failure("division by zero".to_string())
//!     } else {
//!         Success(1.0 / f64::from(n))
//!     }
//! }
//!
//! assert_eq!(parse("4").bind(reciprocal), Success(0.25));
//! assert_eq!(parse("0").bind(reciprocal), Failure("division by zero".to_string()));
//! assert_eq!(parse("x").bind(reciprocal), Failure("not a number: x".to_string()));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod boundary;
pub mod chain;
pub mod combine;
pub mod config;
pub mod error;
pub mod outcome;
pub mod prelude;
pub mod safe;

pub use boundary::{Boundary, Settlement, Status};
pub use chain::{bind, map};
pub use combine::Combine;
pub use config::{BoundaryConfig, OutputFormat};
pub use error::{BoundaryError, Caught, ConfigError};
pub use outcome::Outcome;
pub use outcome::Outcome::{Failure, Success};
pub use safe::{adapt, catch, safe};
