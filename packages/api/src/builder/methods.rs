//! Terminal methods
//!
//! Parse input and run deserializers over it: a single object, or every
//! object until the input is exhausted.

use std::any::Any;

use objstream_core::{
    EventDeserializer, EventDriven, EventStream, FormatDescriptor, Input, JsonFormat,
    JsonValueDeserializer, RawDeserializer, Result,
};
use serde_json::Value;

use crate::builder::core::ObjStreamBuilder;

impl<F: FormatDescriptor> ObjStreamBuilder<'_, F> {
    /// Parse `input` into a token sequence
    ///
    /// # Errors
    /// Backend failures while setting up the token producer
    pub fn events<'a>(&self, input: impl Into<Input<'a>>) -> Result<EventStream<'a, F::Token>> {
        self.parser.parse(input)
    }

    /// Parse dynamically typed data into a token sequence
    ///
    /// # Errors
    /// `UnsupportedInputType` if `data` is neither a buffer nor a reader
    pub fn events_any<D: Any>(&self, data: D) -> Result<EventStream<'static, F::Token>> {
        self.parser.parse_any(data)
    }

    /// Read the first object of `input` through `hook`
    ///
    /// # Errors
    /// `EndOfInput` if `input` holds no object, otherwise any structural,
    /// backend or hook error
    pub fn deserialize<'a, D>(&self, input: impl Into<Input<'a>>, hook: &D) -> Result<D::Output>
    where
        D: EventDeserializer<F> + ?Sized,
    {
        self.deserialize_raw(input, &EventDriven(hook))
    }

    /// Read the first object of `input` with a full-control strategy
    ///
    /// # Errors
    /// As [`deserialize`](Self::deserialize)
    pub fn deserialize_raw<'a, R>(&self, input: impl Into<Input<'a>>, strategy: &R) -> Result<R::Output>
    where
        R: RawDeserializer<F> + ?Sized,
    {
        let mut events = self.events(input)?;
        self.context().execute(strategy, &mut events, 0)
    }

    /// Read every object of `input` through `hook`, in order
    ///
    /// Stops cleanly when the input is exhausted between objects.
    ///
    /// # Errors
    /// The first structural, backend or hook error encountered
    pub fn deserialize_all<'a, D>(&self, input: impl Into<Input<'a>>, hook: &D) -> Result<Vec<D::Output>>
    where
        D: EventDeserializer<F> + ?Sized,
    {
        let mut events = self.events(input)?;
        let ctx = self.context();
        let driver = EventDriven(hook);

        let mut objects = Vec::new();
        loop {
            match ctx.execute(&driver, &mut events, 0) {
                Ok(value) => objects.push(value),
                Err(e) if e.is_end_of_input() => break,
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            objects = objects.len(),
            tokens = events.consumed(),
            "read all objects from input"
        );
        Ok(objects)
    }
}

impl ObjStreamBuilder<'_, JsonFormat> {
    /// Read every top-level JSON object of `input` as a [`Value`]
    ///
    /// # Errors
    /// As [`deserialize_all`](Self::deserialize_all)
    pub fn values<'a>(&self, input: impl Into<Input<'a>>) -> Result<Vec<Value>> {
        self.deserialize_all(input, &JsonValueDeserializer)
    }
}
