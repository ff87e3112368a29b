//! Constructor helpers for [`Error`].

use super::types::Error;
use crate::format::TokenClass;
use crate::state_machine::Expectation;

/// Type-erased failure from a third-party format backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Wraps a failure raised by a format backend.
pub fn backend<E: Into<BoxError>>(e: E) -> Error {
    Error::Backend(e.into())
}

/// Creates a protocol violation for a token that did not match the expectation.
#[must_use]
pub fn protocol_violation(expected: Expectation, found: TokenClass) -> Error {
    Error::ProtocolViolation { expected, found }
}

/// Creates an `UnsupportedInputType` error naming the rejected type.
#[must_use]
pub fn unsupported_input<T: ?Sized>() -> Error {
    Error::UnsupportedInputType {
        type_name: std::any::type_name::<T>(),
    }
}

/// Creates a `NotImplemented` error for a type with no registered strategy.
#[must_use]
pub fn not_implemented(type_name: &'static str) -> Error {
    Error::NotImplemented { type_name }
}
