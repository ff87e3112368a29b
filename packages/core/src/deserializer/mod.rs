//! Deserialization contracts
//!
//! Two roles drive reconstruction of one object from a shared token source:
//!
//! - [`RawDeserializer`]: owns the whole strategy, including how far the
//!   source is consumed.
//! - [`EventDeserializer`]: only produces a value from a bounded
//!   [`ObjectEvents`](crate::events::ObjectEvents) reader. Wrapped in
//!   [`EventDriven`], it becomes a `RawDeserializer` that always consumes the
//!   object completely, however little of it the hook read.

mod context;
mod contracts;
mod table;

pub use context::DeserializeContext;
pub use contracts::{EventDeserializer, EventDriven, RawDeserializer};
pub use table::DeserializerTable;
