//! Expected-token state model tests

use objstream_core::error::Error;
use objstream_core::format::TokenClass;
use objstream_core::state_machine::{Expectation, ExpectationTracker, can_transition};

fn feed_all(tracker: &mut ExpectationTracker, classes: &[TokenClass]) {
    for &class in classes {
        tracker.feed(class).expect("legal token");
    }
}

#[cfg(test)]
mod tracker_tests {
    use super::*;
    use objstream_core::format::TokenClass::*;

    #[test]
    fn tracks_a_nested_document_to_completion() {
        let mut tracker = ExpectationTracker::new(Expectation::ObjectStart);
        assert_eq!(tracker.current(), Some(Expectation::ObjectStart));

        feed_all(&mut tracker, &[ObjectStart, Property]);
        assert_eq!(tracker.current(), Some(Expectation::Value));

        feed_all(&mut tracker, &[ArrayStart, Scalar, ObjectStart]);
        assert_eq!(tracker.depth(), 3);
        assert_eq!(tracker.current(), Some(Expectation::PropertyOrObjectEnd));

        feed_all(&mut tracker, &[ObjectEnd]);
        assert_eq!(tracker.current(), Some(Expectation::ValueOrArrayEnd));

        feed_all(&mut tracker, &[ArrayEnd, ObjectEnd]);
        assert!(tracker.is_complete());
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn rejects_illegal_tokens_with_the_expectation() {
        let mut tracker = ExpectationTracker::new(Expectation::ObjectStart);
        feed_all(&mut tracker, &[ObjectStart]);

        let err = tracker.feed(ArrayEnd).expect_err("array end inside object");
        assert!(matches!(
            err,
            Error::ProtocolViolation {
                expected: Expectation::PropertyOrObjectEnd,
                found: ArrayEnd,
            }
        ));
        assert_eq!(
            err.to_string(),
            "protocol violation: expected property name or object end, got array end"
        );
    }

    #[test]
    fn tokens_after_completion_are_unexpected() {
        let mut tracker = ExpectationTracker::new(Expectation::ObjectStart);
        feed_all(&mut tracker, &[ObjectStart, ObjectEnd]);

        let err = tracker.feed(Scalar).expect_err("trailing token");
        assert!(matches!(err, Error::UnexpectedToken { found: Scalar }));
    }

    #[test]
    fn array_start_state_accepts_only_arrays() {
        let mut tracker = ExpectationTracker::new(Expectation::ArrayStart);
        assert!(tracker.clone().feed(ObjectStart).is_err());

        feed_all(&mut tracker, &[ArrayStart, Scalar, ArrayEnd]);
        assert!(tracker.is_complete());
    }

    #[test]
    fn single_scalar_value_completes() {
        let mut tracker = ExpectationTracker::new(Expectation::Value);
        feed_all(&mut tracker, &[Scalar]);
        assert!(tracker.is_complete());
    }

    #[test]
    fn resume_starts_inside_open_objects() {
        let mut tracker = ExpectationTracker::resume(2);
        assert_eq!(tracker.depth(), 2);
        assert_eq!(tracker.current(), Some(Expectation::PropertyOrObjectEnd));

        feed_all(&mut tracker, &[Property, Scalar, ObjectEnd]);
        assert!(!tracker.is_complete());
        feed_all(&mut tracker, &[ObjectEnd]);
        assert!(tracker.is_complete());

        let fresh = ExpectationTracker::resume(0);
        assert_eq!(fresh.current(), Some(Expectation::ObjectStart));
    }

    #[test]
    fn table_covers_every_value_position() {
        for state in [Expectation::Value, Expectation::ValueOrArrayEnd] {
            assert!(can_transition(state, ObjectStart));
            assert!(can_transition(state, ArrayStart));
            assert!(can_transition(state, Scalar));
        }
        assert!(!can_transition(Expectation::ObjectStart, Scalar));
        assert!(!can_transition(Expectation::Value, ObjectEnd));
    }
}
