//! Transition table
//!
//! Maps `(current expectation, incoming token class)` to the structural
//! effect of the token. A miss means the token is illegal in that state.

use super::types::{Container, Expectation};
use crate::format::TokenClass;

/// Structural effect of a legal token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Opens a container
    Open(Container),
    /// Closes the innermost container
    Close(Container),
    /// Names an object member; a value must follow
    Property,
    /// Completes a scalar value
    Value,
}

/// Looks up the transition for `class` arriving in `state`.
#[must_use]
pub fn transition(state: Expectation, class: TokenClass) -> Option<Transition> {
    use Expectation as E;
    use TokenClass as C;

    match (state, class) {
        (E::ObjectStart | E::Value | E::ValueOrArrayEnd, C::ObjectStart) => {
            Some(Transition::Open(Container::Object))
        }
        (E::ArrayStart | E::Value | E::ValueOrArrayEnd, C::ArrayStart) => {
            Some(Transition::Open(Container::Array))
        }
        (E::PropertyOrObjectEnd, C::Property) => Some(Transition::Property),
        (E::PropertyOrObjectEnd, C::ObjectEnd) => Some(Transition::Close(Container::Object)),
        (E::ValueOrArrayEnd, C::ArrayEnd) => Some(Transition::Close(Container::Array)),
        (E::Value | E::ValueOrArrayEnd, C::Scalar) => Some(Transition::Value),
        _ => None,
    }
}

/// Returns true if `class` is legal in `state`.
#[inline]
#[must_use]
pub fn can_transition(state: Expectation, class: TokenClass) -> bool {
    transition(state, class).is_some()
}
