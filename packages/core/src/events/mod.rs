//! Token sequences and bounded object iteration
//!
//! [`EventStream`] wraps a backend's producer; [`ObjectEvents`] reads exactly
//! one object's worth of tokens from any [`TokenSource`] by counting object
//! scope depth.

mod object;
mod stats;
mod stream;

pub use object::{ObjectEvent, ObjectEvents};
pub use stats::EventStats;
pub use stream::{EventStream, TokenSource};
