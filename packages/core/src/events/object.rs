//! Bounded object iterator
//!
//! Delimits one logical object inside a flat token stream by counting object
//! scope depth. Objects may nest arbitrarily and the stream carries no length
//! prefixes, so bracket counting is the only way to know where an object ends.

use super::stats::EventStats;
use super::stream::TokenSource;
use crate::config::DeserializeConfig;
use crate::error::{Error, Result, protocol_violation};
use crate::format::{FormatDescriptor, TokenClass};
use crate::state_machine::{Expectation, ExpectationTracker};

/// One step of a bounded object read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectEvent<T> {
    /// A token belonging to the object, nested scope markers included
    Token(T),
    /// The object's closing token was consumed; the object is complete
    Closed,
}

impl<T> ObjectEvent<T> {
    /// Returns the token, or `None` for the closing sentinel.
    pub fn into_token(self) -> Option<T> {
        match self {
            ObjectEvent::Token(token) => Some(token),
            ObjectEvent::Closed => None,
        }
    }
}

/// Yields the tokens of exactly one object from a shared token source.
///
/// The opening and closing tokens of the tracked object are consumed but not
/// yielded. Nested object markers are yielded as ordinary tokens. Once the
/// depth returns to zero the reader is terminal: the next `advance()` and
/// every one after it report end of sequence, and the source is positioned
/// right after the closing token.
pub struct ObjectEvents<'a, F: FormatDescriptor> {
    source: &'a mut dyn TokenSource<F::Token>,
    format: &'a F,
    depth: usize,
    done: bool,
    tracker: Option<ExpectationTracker>,
    stats: EventStats,
}

impl<'a, F: FormatDescriptor> ObjectEvents<'a, F> {
    /// Starts reading one object from `source`.
    ///
    /// With `count == 0` the object start token is pulled immediately and
    /// must satisfy `is_obj_start`. A nonzero `count` means the caller
    /// already consumed that many object starts; nothing is pulled.
    ///
    /// # Errors
    ///
    /// `ProtocolViolation` if the first token is not an object start or the
    /// source is a bounded reader whose object already closed, `EndOfInput`
    /// if the input is exhausted, or any producer error.
    pub fn new(
        source: &'a mut dyn TokenSource<F::Token>,
        format: &'a F,
        count: usize,
    ) -> Result<Self> {
        Self::open(source, format, count, None)
    }

    /// Like [`new`](Self::new), with structural validation of every token.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new).
    pub fn validated(
        source: &'a mut dyn TokenSource<F::Token>,
        format: &'a F,
        count: usize,
    ) -> Result<Self> {
        Self::open(source, format, count, Some(ExpectationTracker::resume(count)))
    }

    /// Chooses `new` or `validated` according to `config`.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new).
    pub fn with_config(
        source: &'a mut dyn TokenSource<F::Token>,
        format: &'a F,
        count: usize,
        config: &DeserializeConfig,
    ) -> Result<Self> {
        if config.validate_structure {
            Self::validated(source, format, count)
        } else {
            Self::new(source, format, count)
        }
    }

    fn open(
        source: &'a mut dyn TokenSource<F::Token>,
        format: &'a F,
        count: usize,
        mut tracker: Option<ExpectationTracker>,
    ) -> Result<Self> {
        let mut depth = count;
        if depth == 0 {
            let Some(first) = source.next_token()? else {
                // A finished parent has no value left to give
                return Err(if source.is_closed() {
                    protocol_violation(Expectation::ObjectStart, TokenClass::ObjectEnd)
                } else {
                    Error::EndOfInput
                });
            };
            if !format.is_obj_start(&first) {
                return Err(protocol_violation(
                    Expectation::ObjectStart,
                    format.classify(&first),
                ));
            }
            if let Some(tracker) = tracker.as_mut() {
                tracker.feed(TokenClass::ObjectStart)?;
            }
            depth = 1;
        }

        Ok(Self {
            source,
            format,
            depth,
            done: false,
            tracker,
            stats: EventStats {
                max_depth: depth,
                ..EventStats::default()
            },
        })
    }

    /// Pulls the next token of this object.
    ///
    /// Returns `Ok(Some(ObjectEvent::Closed))` exactly once, when the
    /// object's closing token is consumed, and `Ok(None)` afterwards. If the
    /// source runs dry first, `Ok(None)` is returned with the object still
    /// open; see [`is_done`](Self::is_done).
    ///
    /// # Errors
    ///
    /// Producer errors, and `ProtocolViolation` when validating.
    pub fn advance(&mut self) -> Result<Option<ObjectEvent<F::Token>>> {
        if self.done {
            return Ok(None);
        }
        let Some(token) = self.source.next_token()? else {
            return Ok(None);
        };
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.feed(self.format.classify(&token))?;
        }

        if self.format.is_obj_start(&token) {
            self.depth += 1;
            self.stats.nested_objects += 1;
            self.stats.max_depth = self.stats.max_depth.max(self.depth);
        } else if self.format.is_obj_end(&token) {
            self.depth = self.depth.saturating_sub(1);
            if self.depth == 0 {
                self.done = true;
                return Ok(Some(ObjectEvent::Closed));
            }
        }

        self.stats.tokens_yielded += 1;
        Ok(Some(ObjectEvent::Token(token)))
    }

    /// Consumes and discards the rest of this object.
    ///
    /// Returns the number of tokens skipped. Stops early, without error, if
    /// the source ends first.
    ///
    /// # Errors
    ///
    /// Producer errors, and `ProtocolViolation` when validating.
    pub fn drain(&mut self) -> Result<u64> {
        let mut skipped = 0;
        while let Some(event) = self.advance()? {
            if let ObjectEvent::Token(_) = event {
                self.stats.tokens_yielded -= 1;
                self.stats.tokens_drained += 1;
                skipped += 1;
            }
        }
        Ok(skipped)
    }

    /// Current object scope depth relative to the tracked object.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True once the tracked object's closing token has been consumed.
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> EventStats {
        self.stats
    }

    /// Expected next token class, when structural validation is on.
    #[must_use]
    pub fn expectation(&self) -> Option<Expectation> {
        self.tracker.as_ref().and_then(ExpectationTracker::current)
    }

    /// Format backend this reader classifies tokens with.
    #[inline]
    #[must_use]
    pub fn format(&self) -> &'a F {
        self.format
    }
}

impl<F: FormatDescriptor> TokenSource<F::Token> for ObjectEvents<'_, F> {
    /// The closing sentinel reads as end of sequence to nested readers.
    fn next_token(&mut self) -> Result<Option<F::Token>> {
        Ok(self.advance()?.and_then(ObjectEvent::into_token))
    }

    fn is_closed(&self) -> bool {
        self.done
    }
}

impl<F: FormatDescriptor> Iterator for ObjectEvents<'_, F> {
    type Item = Result<F::Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<F: FormatDescriptor> std::fmt::Debug for ObjectEvents<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectEvents")
            .field("depth", &self.depth)
            .field("done", &self.done)
            .field("expectation", &self.expectation())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
