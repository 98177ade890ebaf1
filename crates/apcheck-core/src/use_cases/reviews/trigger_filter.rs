const SUBMITTED_ACTION: &str = "submitted";
const APPROVED_STATE: &str = "approved";

/// Only submitted approvals trigger an evaluation.
///
/// Comparison is exact and case-sensitive.
pub fn is_trigger_event(action: &str, state: &str) -> bool {
    action == SUBMITTED_ACTION && state == APPROVED_STATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_approval() {
        assert!(is_trigger_event("submitted", "approved"));
    }

    #[test]
    fn other_events() {
        for (action, state) in [
            ("submitted", "commented"),
            ("submitted", "changes_requested"),
            ("submitted", "dismissed"),
            ("edited", "approved"),
            ("dismissed", "approved"),
            ("Submitted", "approved"),
            ("submitted", "APPROVED"),
            ("submitted", "Approved"),
            ("", ""),
            (" submitted", "approved"),
        ] {
            assert!(
                !is_trigger_event(action, state),
                "({action:?}, {state:?}) should not trigger"
            );
        }
    }
}
