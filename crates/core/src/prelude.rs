//! Common imports for code that produces or chains outcomes.
//!
//! ```rust
//! use outcome_core::prelude::*;
//! ```

pub use crate::combine;
pub use crate::combine::Combine;
pub use crate::error::Caught;
pub use crate::outcome::Outcome::{self, Failure, Success};
pub use crate::safe::{adapt, catch, safe};
