use serde::Serialize;

use crate::models::ride::RideStatus;

type S = RideStatus;

/// Order within an entry matters: the first entry is the default selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionTable;

pub static TRANSITIONS: TransitionTable = TransitionTable;

impl TransitionTable {
    pub fn next_states(&self, current: RideStatus) -> &'static [RideStatus] {
        match current {
            S::Requested => &[S::Accepted, S::Canceled],
            S::Accepted => &[S::PickedUp, S::Canceled],
            S::PickedUp => &[S::InTransit],
            S::InTransit => &[S::Completed],
            S::Completed => &[],
            S::Canceled => &[],
            S::Unrecognized => &[],
        }
    }

    pub fn allows(&self, current: RideStatus, proposed: RideStatus) -> bool {
        self.next_states(current).contains(&proposed)
    }

    pub fn entries(&self) -> Vec<TransitionEntry> {
        RideStatus::ALL
            .iter()
            .map(|from| TransitionEntry {
                from: *from,
                to: self.next_states(*from),
                terminal: from.is_terminal(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionEntry {
    pub from: RideStatus,
    pub to: &'static [RideStatus],
    pub terminal: bool,
}

pub fn next_states_for(current: RideStatus) -> &'static [RideStatus] {
    TRANSITIONS.next_states(current)
}

pub fn is_transition_allowed(current: RideStatus, proposed: RideStatus) -> bool {
    TRANSITIONS.allows(current, proposed)
}

#[cfg(test)]
mod tests {
    use super::{is_transition_allowed, next_states_for, TRANSITIONS};
    use crate::models::ride::RideStatus as S;

    #[test]
    fn terminal_states_have_no_exits() {
        assert!(next_states_for(S::Completed).is_empty());
        assert!(next_states_for(S::Canceled).is_empty());
    }

    #[test]
    fn unrecognized_status_offers_nothing() {
        assert!(next_states_for(S::Unrecognized).is_empty());
        for proposed in S::ALL {
            assert!(!is_transition_allowed(S::Unrecognized, proposed));
        }
        assert!(!is_transition_allowed(S::Requested, S::Unrecognized));
    }

    #[test]
    fn declared_order_is_stable() {
        assert_eq!(next_states_for(S::Requested), &[S::Accepted, S::Canceled]);
        assert_eq!(next_states_for(S::Accepted), &[S::PickedUp, S::Canceled]);
        for status in S::ALL {
            assert_eq!(next_states_for(status), next_states_for(status));
        }
    }

    #[test]
    fn canonical_flow_steps_are_allowed() {
        assert!(is_transition_allowed(S::Requested, S::Accepted));
        assert!(is_transition_allowed(S::Accepted, S::PickedUp));
        assert!(is_transition_allowed(S::PickedUp, S::InTransit));
        assert!(is_transition_allowed(S::InTransit, S::Completed));
    }

    #[test]
    fn skipping_steps_is_rejected() {
        assert!(!is_transition_allowed(S::Requested, S::Completed));
        assert!(!is_transition_allowed(S::Accepted, S::InTransit));
        assert!(!is_transition_allowed(S::InTransit, S::Canceled));
        assert!(!is_transition_allowed(S::PickedUp, S::Canceled));
    }

    #[test]
    fn no_status_is_reachable_from_a_later_one() {
        let flow = [S::Requested, S::Accepted, S::PickedUp, S::InTransit, S::Completed];
        for (later_idx, later) in flow.iter().enumerate() {
            for earlier in &flow[..=later_idx] {
                assert!(
                    !is_transition_allowed(*later, *earlier),
                    "{later} -> {earlier} must not be allowed"
                );
            }
        }
    }

    #[test]
    fn entries_cover_every_known_status() {
        let entries = TRANSITIONS.entries();
        assert_eq!(entries.len(), S::ALL.len());
        assert!(entries.iter().filter(|e| e.terminal).all(|e| e.to.is_empty()));
    }
}
