//! # objstream core
//!
//! Format-agnostic, event-based object deserialization.
//!
//! A pluggable [`FormatDescriptor`] turns raw input into a flat sequence of
//! tokens. [`ObjectEvents`] carves exactly one logical object out of that
//! sequence by counting nested object-start/object-end markers, and the
//! [`EventDriven`] driver runs user reconstruction hooks over it, guaranteeing
//! the shared sequence is left right after the object's closing token no
//! matter how much of the object the hook read. A process-wide
//! [`TypeRegistry`] tells hooks which type a nested property holds.
//!
//! Data flow:
//!
//! ```text
//! input -> Parser -> FormatDescriptor -> EventStream -> ObjectEvents
//!       -> EventDriven -> EventDeserializer (consults TypeRegistry) -> value
//! ```
//!
//! ```
//! use objstream_core::prelude::*;
//! use serde_json::json;
//!
//! let parser = Parser::new(JsonFormat);
//! let mut events = parser.parse(r#"{"id": 7, "tags": ["a", "b"]} {"id": 8}"#)?;
//! let ctx = DeserializeContext::new(parser.format());
//!
//! let first = ctx.execute(&EventDriven(JsonValueDeserializer), &mut events, 0)?;
//! assert_eq!(first, json!({"id": 7, "tags": ["a", "b"]}));
//! let second = ctx.execute(&EventDriven(JsonValueDeserializer), &mut events, 0)?;
//! assert_eq!(second["id"], 8);
//! # Ok::<(), objstream_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod deserializer;
pub mod error;
pub mod events;
pub mod format;
pub mod input;
pub mod prelude;
pub mod registry;
pub mod state_machine;

pub use config::DeserializeConfig;
pub use deserializer::{
    DeserializeContext, DeserializerTable, EventDeserializer, EventDriven, RawDeserializer,
};
pub use error::{Error, ErrorKind, Result};
pub use events::{EventStats, EventStream, ObjectEvent, ObjectEvents, TokenSource};
pub use format::{FormatDescriptor, JsonFormat, JsonToken, JsonValueDeserializer, TokenClass, TokenProducer};
pub use input::{Input, Parser};
pub use registry::{TypeKey, TypeRegistry, Typed};
pub use state_machine::{Expectation, ExpectationTracker};
