//! Wrap fallible operations into explicit, inspectable outcomes.
//!
//! This crate wraps a computation that may fail into a discriminated
//! [`Outcome`] value, so call sites can inspect, chain, or fall back instead
//! of propagating immediately. Key pieces:
//!
//! - **Wrapping entry points**: [`call`] / [`run`] execute an operation
//!   inside a protected scope and capture anything it raises - returned
//!   errors and panics alike.
//! - **Filtered capture**: [`call_catching`] / [`run_catching`] capture only
//!   failures a caller-supplied predicate accepts; anything else propagates
//!   to the invoker.
//! - **Outcome combinators**: [`Outcome::map`], [`Outcome::value_or`], and
//!   the [`Outcome::on_success`] / [`Outcome::on_failure`] hooks for
//!   fluent handling of the settled result.
//!
//! # Example
//!
//! ```
//! let outcome = safely::call(|| "21".parse::<i32>().map(|n| n * 2))
//!     .on_failure(|failure| eprintln!("parse failed: {failure}"))
//!     .map(|n| format!("Number: {n}"));
//!
//! assert_eq!(outcome.get().map(String::as_str), Some("Number: 42"));
//! assert_eq!(safely::call(|| "nope".parse::<i32>()).value_or(0), 0);
//! ```

pub mod error;
pub mod outcome;
pub mod wrap;

// Re-export main types
pub use error::{BoxError, Failure};
pub use outcome::Outcome;
pub use wrap::{call, call_catching, run, run_catching};
