//! Expected-token state machine
//!
//! Tracks which structural token class may legally come next while a driver
//! consumes a token stream. The five [`Expectation`] states are driven by an
//! explicit transition table keyed by the current state and the incoming
//! [`TokenClass`](crate::format::TokenClass).
//!
//! # Architecture
//!
//! - `types`: expectation states and container frames
//! - `transitions`: the transition table
//! - `engine`: [`ExpectationTracker`], which applies transitions and keeps the
//!   container stack

mod engine;
mod transitions;
mod types;

pub use engine::ExpectationTracker;
pub use transitions::{Transition, can_transition, transition};
pub use types::{Container, Expectation};
