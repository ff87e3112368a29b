//! Pluggable format backends
//!
//! A format backend turns raw input into a flat sequence of tokens and tells
//! the core which tokens open and close an object scope. The core never looks
//! at token payloads beyond those two predicates (and, for structural
//! validation, the optional [`FormatDescriptor::classify`]).

pub mod json;

use std::fmt;
use std::io::Read;

use crate::error::Result;

pub use json::{JsonFormat, JsonToken, JsonValueDeserializer};

/// Boxed, fallible token producer returned by [`FormatDescriptor::gen_events`].
pub type TokenProducer<'a, T> = Box<dyn Iterator<Item = Result<T>> + 'a>;

/// Structural class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Opens an object scope
    ObjectStart,
    /// Closes an object scope
    ObjectEnd,
    /// Opens an array
    ArrayStart,
    /// Closes an array
    ArrayEnd,
    /// Property name inside an object
    Property,
    /// Any primitive value
    Scalar,
    /// Token the backend did not classify
    Other,
}

impl TokenClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::ObjectStart => "object start",
            TokenClass::ObjectEnd => "object end",
            TokenClass::ArrayStart => "array start",
            TokenClass::ArrayEnd => "array end",
            TokenClass::Property => "property name",
            TokenClass::Scalar => "scalar value",
            TokenClass::Other => "unclassified token",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability object describing one wire format.
///
/// Implementations must honour bracket matching: every object region starts
/// with exactly one token for which [`is_obj_start`](Self::is_obj_start)
/// holds and is closed by one for which [`is_obj_end`](Self::is_obj_end)
/// holds, at the same nesting depth.
pub trait FormatDescriptor {
    /// Opaque token produced by this backend. Tokens are owned values.
    type Token: 'static;

    /// Returns true if `token` opens an object scope.
    fn is_obj_start(&self, token: &Self::Token) -> bool;

    /// Returns true if `token` closes an object scope.
    fn is_obj_end(&self, token: &Self::Token) -> bool;

    /// Produces the token sequence for `source`.
    ///
    /// Producers may be lazy; read failures surface as `Err` items.
    fn gen_events<'a>(&self, source: Box<dyn Read + 'a>) -> Result<TokenProducer<'a, Self::Token>>;

    /// Structural class of `token`.
    ///
    /// The default only knows the two object predicates. Backends that want
    /// structural validation report every class.
    fn classify(&self, token: &Self::Token) -> TokenClass {
        if self.is_obj_start(token) {
            TokenClass::ObjectStart
        } else if self.is_obj_end(token) {
            TokenClass::ObjectEnd
        } else {
            TokenClass::Other
        }
    }
}
