//! Error handling for event-based deserialization
//!
//! Every failure in this crate is structural or a programming error and is
//! surfaced immediately. End-of-sequence inside an object is not an error: it
//! is reported as `Ok(None)` by the iterators.

pub mod classification;
pub mod constructors;
pub mod types;

pub use constructors::{BoxError, backend, not_implemented, protocol_violation, unsupported_input};
pub use types::{Error, ErrorKind, Result};
