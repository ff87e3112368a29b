//! JSON format backend
//!
//! Reads successive top-level JSON documents from a reader one at a time.
//! Each document is parsed whole and then flattened into structural tokens,
//! so memory is bounded by the largest single document, not the input.
//! Object keys keep their document order.

use std::io::Read;

use serde_json::{Map, Value};

use super::{FormatDescriptor, TokenClass, TokenProducer};
use crate::deserializer::{DeserializeContext, EventDeserializer};
use crate::error::{Error, Result, protocol_violation};
use crate::events::ObjectEvents;
use crate::state_machine::Expectation;

/// Token produced by [`JsonFormat`]
#[derive(Debug, Clone, PartialEq)]
pub enum JsonToken {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    /// Object member name
    Key(String),
    /// `null`, boolean, number or string
    Scalar(Value),
}

impl JsonToken {
    /// Returns the scalar payload, if this is a scalar token.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            JsonToken::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the member name, if this is a key token.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            JsonToken::Key(key) => Some(key),
            _ => None,
        }
    }
}

impl From<&str> for JsonToken {
    fn from(key: &str) -> Self {
        JsonToken::Key(key.to_owned())
    }
}

/// Flattens a parsed document into tokens, appending to `out`.
fn flatten_into(value: Value, out: &mut Vec<Result<JsonToken>>) {
    match value {
        Value::Object(members) => {
            out.push(Ok(JsonToken::ObjectStart));
            for (key, member) in members {
                out.push(Ok(JsonToken::Key(key)));
                flatten_into(member, out);
            }
            out.push(Ok(JsonToken::ObjectEnd));
        }
        Value::Array(items) => {
            out.push(Ok(JsonToken::ArrayStart));
            for item in items {
                flatten_into(item, out);
            }
            out.push(Ok(JsonToken::ArrayEnd));
        }
        scalar => out.push(Ok(JsonToken::Scalar(scalar))),
    }
}

/// JSON backend for the event core
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl JsonFormat {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Token sequence for an already-parsed value.
    #[must_use]
    pub fn tokens(value: Value) -> Vec<JsonToken> {
        let mut out = Vec::new();
        flatten_into(value, &mut out);
        out.into_iter().flatten().collect()
    }
}

impl FormatDescriptor for JsonFormat {
    type Token = JsonToken;

    fn is_obj_start(&self, token: &JsonToken) -> bool {
        matches!(token, JsonToken::ObjectStart)
    }

    fn is_obj_end(&self, token: &JsonToken) -> bool {
        matches!(token, JsonToken::ObjectEnd)
    }

    fn gen_events<'a>(&self, source: Box<dyn Read + 'a>) -> Result<TokenProducer<'a, JsonToken>> {
        let documents = serde_json::Deserializer::from_reader(source).into_iter::<Value>();
        Ok(Box::new(documents.flat_map(|document| {
            let mut out = Vec::new();
            match document {
                Ok(value) => flatten_into(value, &mut out),
                Err(e) => out.push(Err(Error::from(e))),
            }
            out
        })))
    }

    fn classify(&self, token: &JsonToken) -> TokenClass {
        match token {
            JsonToken::ObjectStart => TokenClass::ObjectStart,
            JsonToken::ObjectEnd => TokenClass::ObjectEnd,
            JsonToken::ArrayStart => TokenClass::ArrayStart,
            JsonToken::ArrayEnd => TokenClass::ArrayEnd,
            JsonToken::Key(_) => TokenClass::Property,
            JsonToken::Scalar(_) => TokenClass::Scalar,
        }
    }
}

/// Rebuilds one bounded JSON object as a [`serde_json::Value`].
///
/// This is the native value a property falls back to when the type registry
/// has no entry for it. Expects the object start to be consumed by the
/// bounded reader itself (`count` 0) or by the caller (`count` 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValueDeserializer;

enum Frame {
    Object(Map<String, Value>, Option<String>),
    Array(Vec<Value>),
}

impl JsonValueDeserializer {
    /// Places a completed value into the innermost open container.
    fn attach(stack: &mut [Frame], value: Value, found: TokenClass) -> Result<()> {
        match stack.last_mut() {
            Some(Frame::Object(members, pending)) => {
                let key = pending
                    .take()
                    .ok_or_else(|| protocol_violation(Expectation::PropertyOrObjectEnd, found))?;
                members.insert(key, value);
                Ok(())
            }
            Some(Frame::Array(items)) => {
                items.push(value);
                Ok(())
            }
            None => Err(Error::UnexpectedToken { found }),
        }
    }
}

impl EventDeserializer<JsonFormat> for JsonValueDeserializer {
    type Output = Value;

    fn deserialize(
        &self,
        events: &mut ObjectEvents<'_, JsonFormat>,
        _ctx: &DeserializeContext<'_, JsonFormat>,
    ) -> Result<Value> {
        // Root object: its start was consumed by the bounded reader and its
        // end arrives as the sentinel.
        let mut stack = vec![Frame::Object(Map::new(), None)];

        for token in events.by_ref() {
            match token? {
                JsonToken::ObjectStart => stack.push(Frame::Object(Map::new(), None)),
                JsonToken::ArrayStart => stack.push(Frame::Array(Vec::new())),
                JsonToken::Key(key) => match stack.last_mut() {
                    Some(Frame::Object(_, pending)) if pending.is_none() => *pending = Some(key),
                    Some(Frame::Object(..)) => {
                        return Err(protocol_violation(Expectation::Value, TokenClass::Property));
                    }
                    _ => {
                        return Err(protocol_violation(
                            Expectation::ValueOrArrayEnd,
                            TokenClass::Property,
                        ));
                    }
                },
                JsonToken::ObjectEnd => {
                    let Some(Frame::Object(members, None)) = stack.pop() else {
                        return Err(protocol_violation(Expectation::Value, TokenClass::ObjectEnd));
                    };
                    Self::attach(&mut stack, Value::Object(members), TokenClass::ObjectStart)?;
                }
                JsonToken::ArrayEnd => {
                    let Some(Frame::Array(items)) = stack.pop() else {
                        return Err(protocol_violation(
                            Expectation::PropertyOrObjectEnd,
                            TokenClass::ArrayEnd,
                        ));
                    };
                    Self::attach(&mut stack, Value::Array(items), TokenClass::ArrayStart)?;
                }
                JsonToken::Scalar(value) => {
                    Self::attach(&mut stack, value, TokenClass::Scalar)?;
                }
            }
        }

        match stack.pop() {
            Some(Frame::Object(members, None)) if stack.is_empty() => Ok(Value::Object(members)),
            Some(Frame::Object(_, Some(_))) if stack.is_empty() => Err(protocol_violation(
                Expectation::Value,
                TokenClass::ObjectEnd,
            )),
            _ => Err(Error::Truncated {
                depth: events.depth(),
            }),
        }
    }
}
