//! objstream public API
//!
//! Fluent entry point over the event-based deserialization core. Parse input
//! with a format backend, then read one object, or every object, through a
//! reconstruction hook.
//!
//! ```
//! use objstream::ObjStream;
//! use serde_json::json;
//!
//! let values = ObjStream::json().values(r#"{"a": 1} {"b": {"c": 2}}"#)?;
//! assert_eq!(values, vec![json!({"a": 1}), json!({"b": {"c": 2}})]);
//! # Ok::<(), objstream::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::ObjStreamBuilder;

// Re-export the core so callers need a single dependency
pub use objstream_core::{
    DeserializeConfig, DeserializeContext, DeserializerTable, Error, ErrorKind, EventDeserializer,
    EventDriven, EventStats, EventStream, Expectation, ExpectationTracker, FormatDescriptor, Input,
    JsonFormat, JsonToken, JsonValueDeserializer, ObjectEvent, ObjectEvents, Parser,
    RawDeserializer, Result, TokenClass, TokenProducer, TokenSource, TypeKey, TypeRegistry, Typed,
};
pub use objstream_core::{prelude, registry};

/// Main entry point providing static builder constructors
pub struct ObjStream;

impl ObjStream {
    /// Builder over the bundled JSON backend
    ///
    /// Shorthand for `ObjStreamBuilder::new(JsonFormat)`
    #[must_use]
    pub fn json() -> ObjStreamBuilder<'static, JsonFormat> {
        ObjStreamBuilder::new(JsonFormat)
    }

    /// Builder over a custom format backend
    ///
    /// # Arguments
    /// * `format` - Backend producing and classifying tokens
    pub fn with_format<F: FormatDescriptor>(format: F) -> ObjStreamBuilder<'static, F> {
        ObjStreamBuilder::new(format)
    }
}
