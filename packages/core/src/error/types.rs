//! Core error types for bounded event iteration and reconstruction.

use crate::format::TokenClass;
use crate::state_machine::Expectation;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Token stream does not have the structure the reader required
    Protocol,
    /// Input front-end was handed data of an unrecognised shape
    UnsupportedInput,
    /// No concrete strategy exists for the requested type
    NotImplemented,
    /// Input ended before the tracked object was closed
    Truncated,
    /// Reconstruction produced a value of an unexpected type
    TypeMismatch,
    /// Failure raised by the format backend or the underlying reader
    Backend,
}

/// Errors raised by the deserialization core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token of the wrong structural class arrived.
    #[error("protocol violation: expected {expected}, got {found}")]
    ProtocolViolation {
        expected: Expectation,
        found: TokenClass,
    },

    /// A token arrived after the tracked structure was already complete.
    #[error("unexpected {found} after the tracked structure completed")]
    UnexpectedToken { found: TokenClass },

    /// The sequence was exhausted before an object started.
    #[error("end of input reached before an object start")]
    EndOfInput,

    /// Draining stopped at end of input with objects still open.
    #[error("input truncated with {depth} object scope(s) still open")]
    Truncated { depth: usize },

    #[error("unsupported input type `{type_name}`: expected a byte/text buffer or a reader")]
    UnsupportedInputType { type_name: &'static str },

    /// A dispatch table was asked for a type it has no deserializer for.
    #[error("no deserializer registered for `{type_name}`")]
    NotImplemented { type_name: &'static str },

    #[error("deserializer for `{expected}` produced a value of another type")]
    TypeMismatch { expected: &'static str },

    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON backend error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure from a third-party format backend, passed through untouched.
    #[error("format backend error: {0}")]
    Backend(#[source] super::BoxError),
}
