//! Fluent builder modules
//!
//! `core` holds the builder and its configuration methods, `methods` the
//! terminal operations that parse input and run deserializers.

pub mod core;
pub mod methods;

pub use self::core::ObjStreamBuilder;
