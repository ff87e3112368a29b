//! Type registry
//!
//! Resolves `(declaring type, property name)` to the type of the nested value
//! stored under that property, so reconstruction code knows what to build
//! for a nested object. A property with no entry is read as the format's
//! native value type.

mod core;
mod type_key;
mod typed;

pub use self::core::TypeRegistry;
pub use type_key::TypeKey;
pub use typed::Typed;
