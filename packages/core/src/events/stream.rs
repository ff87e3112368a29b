//! Pull-based token sequence wrapper

use crate::error::Result;
use crate::format::TokenProducer;

/// Anything a bounded reader can pull tokens from.
///
/// Implemented by [`EventStream`] and by
/// [`ObjectEvents`](super::ObjectEvents), so a nested reader can consume
/// through its parent and both keep consistent depth accounting.
pub trait TokenSource<T> {
    /// Pulls the next token; `Ok(None)` signals end of sequence.
    ///
    /// # Errors
    ///
    /// Whatever the underlying producer raised, unchanged.
    fn next_token(&mut self) -> Result<Option<T>>;

    /// True when end of sequence comes from a closed object scope rather
    /// than exhausted input.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Single-pass, forward-only sequence over a format backend's tokens.
///
/// Reading advances the cursor for everyone holding this stream. No
/// buffering, no peeking, not restartable.
pub struct EventStream<'a, T> {
    producer: TokenProducer<'a, T>,
    consumed: u64,
}

impl<'a, T> EventStream<'a, T> {
    /// Wraps a fallible token producer.
    pub fn new<I>(producer: I) -> Self
    where
        I: Iterator<Item = Result<T>> + 'a,
    {
        Self {
            producer: Box::new(producer),
            consumed: 0,
        }
    }

    /// Wraps an in-memory token list.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        T: 'a,
    {
        Self::new(tokens.into_iter().map(Ok))
    }

    /// Number of tokens pulled so far.
    #[inline]
    #[must_use]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

impl<T> TokenSource<T> for EventStream<'_, T> {
    fn next_token(&mut self) -> Result<Option<T>> {
        match self.producer.next() {
            Some(Ok(token)) => {
                self.consumed += 1;
                Ok(Some(token))
            }
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

impl<T> Iterator for EventStream<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<T> std::fmt::Debug for EventStream<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStream")
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}
