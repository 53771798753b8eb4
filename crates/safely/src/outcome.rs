//! The settled result of a wrapped operation.
//!
//! An [`Outcome`] holds either the value an operation produced or the
//! [`Failure`] captured from it. Every accessor is total: inspecting an
//! outcome never fails, whichever variant it holds.

use crate::error::{BoxError, Failure};

/// Immutable container holding either a success value or a captured failure.
///
/// Outcomes are produced by the wrapping functions in [`crate::wrap`] and by
/// the [`Outcome::success`] / [`Outcome::failure`] constructors. They are
/// never mutated in place; combinators consume the outcome and return a new
/// one.
///
/// # Examples
///
/// ```
/// use safely::Outcome;
///
/// let doubled = Outcome::success(21).map(|n| n * 2);
/// assert_eq!(doubled.get(), Some(&42));
///
/// let fallback = Outcome::<i32>::failure("no value").value_or(7);
/// assert_eq!(fallback, 7);
/// ```
#[derive(Debug)]
pub enum Outcome<T> {
    /// The operation completed and produced a value.
    Success(T),
    /// The operation raised a failure, captured here.
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome wrapping `value`.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from anything convertible into a boxed error.
    ///
    /// To wrap an already-built [`Failure`], construct the
    /// [`Outcome::Failure`] variant directly.
    #[must_use]
    pub fn failure(error: impl Into<BoxError>) -> Self {
        Self::Failure(Failure::raised(error))
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a captured failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the wrapped value, or `None` if the outcome is a failure.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the captured failure, or `None` if the outcome is a success.
    #[must_use]
    pub const fn error(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the wrapped value, or exactly `fallback` on failure.
    #[must_use]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Transforms the wrapped value on success; carries the same failure
    /// untouched otherwise, without invoking `transform`.
    ///
    /// `transform` is assumed non-failing. If it panics, the panic is not
    /// caught here and propagates to the caller; only the original wrapped
    /// operation is guarded.
    #[must_use]
    pub fn map<R>(self, transform: impl FnOnce(T) -> R) -> Outcome<R> {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Invokes `action` with the value if the outcome is a success, then
    /// returns the outcome unchanged for chaining.
    #[must_use]
    pub fn on_success(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(ref value) = self {
            action(value);
        }
        self
    }

    /// Invokes `action` with the failure if the outcome is one, then returns
    /// the outcome unchanged for chaining.
    #[must_use]
    pub fn on_failure(self, action: impl FnOnce(&Failure)) -> Self {
        if let Self::Failure(ref error) = self {
            action(error);
        }
        self
    }

    /// Converts into a plain `Result`, bridging back to `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] if the outcome is one.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Consumes the outcome, returning the value if it is a success.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure if it is one.
    #[must_use]
    pub fn into_error(self) -> Option<Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

impl<T, E: Into<BoxError>> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Failure::raised(error)),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
