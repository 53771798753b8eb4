//! Stateless entry points that run an operation inside a protected scope.
//!
//! [`call`] and [`run`] capture every failure the operation raises - both
//! returned errors and panics unwinding out of the closure - so the caller
//! always gets a settled [`Outcome`] back. The `_catching` variants take a
//! predicate narrowing what gets captured: a failure the predicate rejects
//! is returned as `Err` to the invoker instead of being silently boxed.

use std::panic::{self, AssertUnwindSafe};

use crate::error::{BoxError, Failure};
use crate::outcome::Outcome;

/// Executes a value-producing operation, capturing any failure it raises.
///
/// The operation runs exactly once, synchronously, on the calling thread.
/// A returned error or a panic unwinding out of the closure becomes a
/// failed [`Outcome`]; this function itself never fails.
///
/// # Examples
///
/// ```
/// let outcome = safely::call(|| "21".parse::<i32>().map(|n| n * 2));
/// assert_eq!(outcome.get(), Some(&42));
///
/// let outcome = safely::call(|| "nope".parse::<i32>());
/// assert!(outcome.is_failure());
/// ```
pub fn call<T, E, F>(operation: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(error)) => Outcome::Failure(capture(Failure::raised(error))),
        Err(payload) => Outcome::Failure(capture(Failure::from_panic(payload))),
    }
}

/// Executes a value-producing operation, capturing only failures accepted
/// by `filter`.
///
/// A matching failure is boxed into the returned [`Outcome`] exactly as
/// [`call`] would; a non-matching one propagates to the invoker with its
/// identity intact. The split lets callers capture the failure kinds they
/// anticipate while unexpected kinds still surface loudly.
///
/// # Errors
///
/// Returns the raised [`Failure`] when `filter` rejects it.
///
/// # Examples
///
/// ```
/// use std::num::ParseIntError;
///
/// // Anticipated kind: captured.
/// let outcome = safely::call_catching(
///     || "nope".parse::<i32>(),
///     |failure| failure.is::<ParseIntError>(),
/// );
/// assert!(outcome.is_ok_and(|o| o.is_failure()));
///
/// // Unanticipated kind: propagated to the invoker.
/// let outcome = safely::call_catching(
///     || "nope".parse::<i32>(),
///     |failure| failure.is::<std::io::Error>(),
/// );
/// assert!(outcome.is_err());
/// ```
pub fn call_catching<T, E, F, P>(operation: F, filter: P) -> Result<Outcome<T>, Failure>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
    P: FnOnce(&Failure) -> bool,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(value)) => Ok(Outcome::Success(value)),
        Ok(Err(error)) => sift(Failure::raised(error), filter),
        Err(payload) => sift(Failure::from_panic(payload), filter),
    }
}

/// Executes a side-effect-only operation, capturing any failure it raises.
///
/// Analog of [`call`] for operations run purely for effect; normal
/// completion yields `Success(())`.
pub fn run<E, F>(operation: F) -> Outcome<()>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    call(operation)
}

/// Executes a side-effect-only operation, capturing only failures accepted
/// by `filter`.
///
/// Analog of [`call_catching`]; identical filter and passthrough semantics.
///
/// # Errors
///
/// Returns the raised [`Failure`] when `filter` rejects it.
pub fn run_catching<E, F, P>(operation: F, filter: P) -> Result<Outcome<()>, Failure>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
    P: FnOnce(&Failure) -> bool,
{
    call_catching(operation, filter)
}

fn capture(failure: Failure) -> Failure {
    tracing::debug!(failure = %failure, "captured failure");
    failure
}

fn sift<T, P>(failure: Failure, filter: P) -> Result<Outcome<T>, Failure>
where
    P: FnOnce(&Failure) -> bool,
{
    if filter(&failure) {
        Ok(Outcome::Failure(capture(failure)))
    } else {
        Err(failure)
    }
}
