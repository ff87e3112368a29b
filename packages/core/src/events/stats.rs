//! Per-object iteration statistics

/// Counters kept by one [`ObjectEvents`](super::ObjectEvents) reader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventStats {
    /// Tokens handed out by `advance()`, excluding the closing sentinel
    pub tokens_yielded: u64,
    /// Tokens skipped by `drain()`
    pub tokens_drained: u64,
    /// Nested object starts seen inside the tracked object
    pub nested_objects: u64,
    /// Deepest object nesting reached, counting the tracked object as 1
    pub max_depth: usize,
}
