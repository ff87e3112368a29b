//! objstream prelude
//!
//! The types most reconstruction code needs, in one import.

pub use crate::config::DeserializeConfig;
pub use crate::deserializer::{
    DeserializeContext, DeserializerTable, EventDeserializer, EventDriven, RawDeserializer,
};
pub use crate::error::{Error, Result};
pub use crate::events::{EventStream, ObjectEvent, ObjectEvents, TokenSource};
pub use crate::format::{FormatDescriptor, JsonFormat, JsonToken, JsonValueDeserializer};
pub use crate::input::{Input, Parser};
pub use crate::registry::{TypeKey, TypeRegistry, Typed};
