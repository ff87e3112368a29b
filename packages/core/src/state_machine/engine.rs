//! Tracker driving the transition table

use super::transitions::{Transition, transition};
use super::types::{Container, Expectation};
use crate::error::{Error, Result, protocol_violation};
use crate::format::TokenClass;

/// Follows a token stream and rejects tokens that break its structure.
///
/// `current()` is `None` once the outermost container has closed (or the
/// initial scalar value has been read).
#[derive(Debug, Clone)]
pub struct ExpectationTracker {
    state: Option<Expectation>,
    stack: Vec<Container>,
}

impl ExpectationTracker {
    /// Starts a tracker in `initial`, with no containers open.
    #[must_use]
    pub fn new(initial: Expectation) -> Self {
        Self {
            state: Some(initial),
            stack: Vec::new(),
        }
    }

    /// Starts a tracker inside `open_objects` already-opened objects.
    ///
    /// Used when a reader resumes right after the caller consumed object
    /// start tokens itself. With zero objects this is `new(ObjectStart)`.
    #[must_use]
    pub fn resume(open_objects: usize) -> Self {
        if open_objects == 0 {
            return Self::new(Expectation::ObjectStart);
        }
        Self {
            state: Some(Expectation::PropertyOrObjectEnd),
            stack: vec![Container::Object; open_objects],
        }
    }

    /// Applies one token class.
    ///
    /// # Errors
    ///
    /// `ProtocolViolation` if `class` is illegal in the current state,
    /// `UnexpectedToken` if the tracked structure already completed.
    pub fn feed(&mut self, class: TokenClass) -> Result<()> {
        let Some(state) = self.state else {
            return Err(Error::UnexpectedToken { found: class });
        };
        let step = transition(state, class).ok_or_else(|| protocol_violation(state, class))?;

        match step {
            Transition::Open(container) => {
                self.stack.push(container);
                self.state = Some(container.member_expectation());
            }
            Transition::Property => self.state = Some(Expectation::Value),
            Transition::Close(_) => {
                self.stack.pop();
                self.complete_value();
            }
            Transition::Value => self.complete_value(),
        }
        Ok(())
    }

    /// Current expectation, or `None` when complete.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<Expectation> {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_none()
    }

    /// Number of open containers, objects and arrays alike.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn complete_value(&mut self) {
        self.state = self.stack.last().copied().map(Container::member_expectation);
    }
}
