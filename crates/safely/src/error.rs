//! The opaque failure payload captured by the wrapping layer.

use std::any::Any;

use thiserror::Error;

/// Boxed error type used at the wrapping boundary.
///
/// Anything convertible into this (concrete error types, `String`, `&str`)
/// can be raised by a wrapped operation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What went wrong inside a wrapped operation.
///
/// A failure is either an error value the operation returned or a panic that
/// unwound out of it. The original error keeps its identity: `Display` and
/// the `source()` chain delegate to it, and [`Failure::downcast_ref`]
/// recovers the concrete type.
#[derive(Debug, Error)]
pub enum Failure {
    /// Error value returned by the operation.
    #[error(transparent)]
    Raised(BoxError),

    /// Panic that unwound out of the operation.
    #[error("operation panicked: {message}")]
    Panicked {
        /// Message extracted from the panic payload.
        message: String,
    },
}

impl Failure {
    /// Wraps an error value raised by an operation.
    pub fn raised(error: impl Into<BoxError>) -> Self {
        Self::Raised(error.into())
    }

    /// Builds a failure from a payload recovered during unwinding.
    ///
    /// Panic payloads are almost always `&str` or `String`; anything else is
    /// recorded as opaque.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "opaque panic payload".to_owned());
        Self::Panicked { message }
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if the failure is a raised error of concrete type `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: std::error::Error + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Borrows the raised error as its concrete type, if it is one.
    ///
    /// Returns `None` for panics and for raised errors of any other type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Raised(error) => error.downcast_ref::<E>(),
            Self::Panicked { .. } => None,
        }
    }

    /// Returns `true` if the failure came from a panic rather than a
    /// returned error.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io;

    use super::*;

    #[test]
    fn raised_failure_keeps_message_and_type() {
        let failure = Failure::raised(io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert_eq!(failure.message(), "gone");
        assert!(failure.is::<io::Error>());
        assert!(!failure.is_panic());

        let concrete = failure.downcast_ref::<io::Error>().unwrap();
        assert_eq!(concrete.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn raised_failure_from_plain_message() {
        let failure = Failure::raised("boom");

        assert_eq!(failure.message(), "boom");
        assert!(!failure.is::<io::Error>());
    }

    #[test]
    fn panic_payload_str_message_is_extracted() {
        let payload: Box<dyn Any + Send> = Box::new("went sideways");
        let failure = Failure::from_panic(payload);

        assert!(failure.is_panic());
        assert_eq!(failure.message(), "operation panicked: went sideways");
    }

    #[test]
    fn panic_payload_string_message_is_extracted() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("went sideways"));
        let failure = Failure::from_panic(payload);

        assert_eq!(failure.message(), "operation panicked: went sideways");
    }

    #[test]
    fn panic_payload_of_unknown_type_is_opaque() {
        let payload: Box<dyn Any + Send> = Box::new(17_u8);
        let failure = Failure::from_panic(payload);

        assert_eq!(failure.message(), "operation panicked: opaque panic payload");
    }

    #[derive(Debug, Error)]
    #[error("denied")]
    struct Locked(#[source] io::Error);

    #[test]
    fn source_chain_survives_capture() {
        let outer = Locked(io::Error::new(io::ErrorKind::PermissionDenied, "root cause"));
        let failure = Failure::raised(outer);

        let source = std::error::Error::source(&failure).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("root cause"));
    }
}
