//! Shared test format
//!
//! Whitespace separated words: `{` `}` open and close objects, `[` `]` open
//! and close arrays, integers are scalars, anything else is a property name.

#![allow(dead_code)]

use std::io::Read;

use objstream_core::prelude::*;
use objstream_core::{TokenClass, TokenProducer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tok {
    Start,
    End,
    ArrStart,
    ArrEnd,
    Key(String),
    Int(i64),
}

impl Tok {
    pub fn parse(word: &str) -> Self {
        match word {
            "{" => Tok::Start,
            "}" => Tok::End,
            "[" => Tok::ArrStart,
            "]" => Tok::ArrEnd,
            other => other
                .parse()
                .map_or_else(|_| Tok::Key(other.to_owned()), Tok::Int),
        }
    }
}

pub fn key(name: &str) -> Tok {
    Tok::Key(name.to_owned())
}

/// Tokens for a whitespace separated word list.
pub fn toks(text: &str) -> Vec<Tok> {
    text.split_whitespace().map(Tok::parse).collect()
}

/// In-memory token sequence for a whitespace separated word list.
pub fn stream(text: &str) -> EventStream<'static, Tok> {
    EventStream::from_tokens(toks(text))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TestFormat;

impl FormatDescriptor for TestFormat {
    type Token = Tok;

    fn is_obj_start(&self, token: &Tok) -> bool {
        *token == Tok::Start
    }

    fn is_obj_end(&self, token: &Tok) -> bool {
        *token == Tok::End
    }

    fn gen_events<'a>(&self, mut source: Box<dyn Read + 'a>) -> Result<TokenProducer<'a, Tok>> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;
        Ok(Box::new(toks(&text).into_iter().map(Ok)))
    }

    fn classify(&self, token: &Tok) -> TokenClass {
        match token {
            Tok::Start => TokenClass::ObjectStart,
            Tok::End => TokenClass::ObjectEnd,
            Tok::ArrStart => TokenClass::ArrayStart,
            Tok::ArrEnd => TokenClass::ArrayEnd,
            Tok::Key(_) => TokenClass::Property,
            Tok::Int(_) => TokenClass::Scalar,
        }
    }
}

/// Format relying on the default `classify`
#[derive(Debug, Clone, Copy, Default)]
pub struct BareFormat;

impl FormatDescriptor for BareFormat {
    type Token = Tok;

    fn is_obj_start(&self, token: &Tok) -> bool {
        *token == Tok::Start
    }

    fn is_obj_end(&self, token: &Tok) -> bool {
        *token == Tok::End
    }

    fn gen_events<'a>(&self, source: Box<dyn Read + 'a>) -> Result<TokenProducer<'a, Tok>> {
        TestFormat.gen_events(source)
    }
}

/// Hook that reads nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Skip;

impl<F: FormatDescriptor> EventDeserializer<F> for Skip {
    type Output = ();

    fn deserialize(
        &self,
        _events: &mut ObjectEvents<'_, F>,
        _ctx: &DeserializeContext<'_, F>,
    ) -> Result<()> {
        Ok(())
    }
}

/// Hook that collects every token it is given
#[derive(Debug, Clone, Copy, Default)]
pub struct Collect;

impl EventDeserializer<TestFormat> for Collect {
    type Output = Vec<Tok>;

    fn deserialize(
        &self,
        events: &mut ObjectEvents<'_, TestFormat>,
        _ctx: &DeserializeContext<'_, TestFormat>,
    ) -> Result<Vec<Tok>> {
        events.by_ref().collect()
    }
}
