//! State machine types

use std::fmt;

/// What kind of token a well-formed stream must produce next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// An object start
    ObjectStart,
    /// A property name or the end of the current object
    PropertyOrObjectEnd,
    /// Any value: scalar, object or array
    Value,
    /// An array start
    ArrayStart,
    /// Another array element or the end of the current array
    ValueOrArrayEnd,
}

impl Expectation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Expectation::ObjectStart => "object start",
            Expectation::PropertyOrObjectEnd => "property name or object end",
            Expectation::Value => "value",
            Expectation::ArrayStart => "array start",
            Expectation::ValueOrArrayEnd => "value or array end",
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open container on the tracker's stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Object,
    Array,
}

impl Container {
    /// Expectation right after this container opens, and after each of its
    /// members completes.
    #[must_use]
    pub fn member_expectation(self) -> Expectation {
        match self {
            Container::Object => Expectation::PropertyOrObjectEnd,
            Container::Array => Expectation::ValueOrArrayEnd,
        }
    }
}
