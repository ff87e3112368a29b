//! Input front-end
//!
//! Accepts either an in-memory buffer or a reader, and hands the format
//! backend a reader positioned at the start of the data.

use std::any::{Any, type_name};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Stdin};

use bytes::Bytes;

use crate::error::{Result, unsupported_input};
use crate::events::EventStream;
use crate::format::FormatDescriptor;

/// Shape of data accepted by [`Parser`]
pub enum Input<'a> {
    /// Byte or text buffer
    Buffer(Bytes),
    /// Reader already positioned where parsing should begin
    Stream(Box<dyn Read + 'a>),
}

impl<'a> Input<'a> {
    /// Wraps any reader.
    pub fn reader<R: Read + 'a>(reader: R) -> Self {
        Input::Stream(Box::new(reader))
    }

    /// Classifies dynamically typed data.
    ///
    /// Buffers: `Vec<u8>`, `String`, `&'static str`, `&'static [u8]`,
    /// `Bytes`. Readers: `Box<dyn Read + Send>`, `Box<dyn Read>`, `File`,
    /// `BufReader<File>`, `Stdin`, `Cursor<Vec<u8>>`, `Cursor<&'static [u8]>`.
    /// Any other reader can be boxed first or wrapped with
    /// [`Input::reader`].
    ///
    /// # Errors
    ///
    /// `UnsupportedInputType` for anything else.
    pub fn classify<D: Any>(data: D) -> Result<Input<'static>> {
        let mut slot = Some(data);
        let any: &mut dyn Any = &mut slot;

        let input = if let Some(buf) = take::<Vec<u8>>(any) {
            Input::Buffer(Bytes::from(buf))
        } else if let Some(text) = take::<String>(any) {
            Input::Buffer(Bytes::from(text))
        } else if let Some(text) = take::<&'static str>(any) {
            Input::Buffer(Bytes::from_static(text.as_bytes()))
        } else if let Some(buf) = take::<&'static [u8]>(any) {
            Input::Buffer(Bytes::from_static(buf))
        } else if let Some(buf) = take::<Bytes>(any) {
            Input::Buffer(buf)
        } else if let Some(reader) = take::<Box<dyn Read + Send>>(any) {
            Input::Stream(reader)
        } else if let Some(reader) = take::<Box<dyn Read>>(any) {
            Input::Stream(reader)
        } else if let Some(file) = take::<File>(any) {
            Input::reader(file)
        } else if let Some(file) = take::<BufReader<File>>(any) {
            Input::reader(file)
        } else if let Some(stdin) = take::<Stdin>(any) {
            Input::reader(stdin)
        } else if let Some(cursor) = take::<Cursor<Vec<u8>>>(any) {
            Input::reader(cursor)
        } else if let Some(cursor) = take::<Cursor<&'static [u8]>>(any) {
            Input::reader(cursor)
        } else {
            return Err(unsupported_input::<D>());
        };

        tracing::trace!(input = type_name::<D>(), kind = input.kind(), "classified input");
        Ok(input)
    }

    /// Reader over the data; buffers get a fresh cursor at offset 0.
    #[must_use]
    pub fn into_reader(self) -> Box<dyn Read + 'a> {
        match self {
            Input::Buffer(bytes) => Box::new(Cursor::new(bytes)),
            Input::Stream(reader) => reader,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Input::Buffer(_) => "buffer",
            Input::Stream(_) => "stream",
        }
    }
}

fn take<T: 'static>(any: &mut dyn Any) -> Option<T> {
    any.downcast_mut::<Option<T>>().and_then(Option::take)
}

impl From<Vec<u8>> for Input<'_> {
    fn from(buf: Vec<u8>) -> Self {
        Input::Buffer(Bytes::from(buf))
    }
}

impl From<&[u8]> for Input<'_> {
    fn from(buf: &[u8]) -> Self {
        Input::Buffer(Bytes::copy_from_slice(buf))
    }
}

impl From<String> for Input<'_> {
    fn from(text: String) -> Self {
        Input::Buffer(Bytes::from(text))
    }
}

impl From<&str> for Input<'_> {
    fn from(text: &str) -> Self {
        Input::Buffer(Bytes::copy_from_slice(text.as_bytes()))
    }
}

impl From<Bytes> for Input<'_> {
    fn from(buf: Bytes) -> Self {
        Input::Buffer(buf)
    }
}

impl std::fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            Input::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Turns input into a token sequence using one format backend.
#[derive(Debug, Clone, Default)]
pub struct Parser<F> {
    format: F,
}

impl<F: FormatDescriptor> Parser<F> {
    pub fn new(format: F) -> Self {
        Self { format }
    }

    #[inline]
    pub fn format(&self) -> &F {
        &self.format
    }

    /// Produces the token sequence for `input`.
    ///
    /// # Errors
    ///
    /// Whatever the backend raises while setting up its producer.
    pub fn parse<'a>(&self, input: impl Into<Input<'a>>) -> Result<EventStream<'a, F::Token>> {
        let producer = self.format.gen_events(input.into().into_reader())?;
        Ok(EventStream::new(producer))
    }

    /// Classifies `data` with [`Input::classify`] and parses it.
    ///
    /// # Errors
    ///
    /// `UnsupportedInputType` for unrecognised data, otherwise as
    /// [`parse`](Self::parse).
    pub fn parse_any<D: Any>(&self, data: D) -> Result<EventStream<'static, F::Token>> {
        self.parse(Input::classify(data)?)
    }
}
