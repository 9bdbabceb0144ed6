use crate::guard::transitions::is_transition_allowed;
use crate::models::ride::RideStatus;
use crate::models::role::Role;

/// Admins get driver permissions.
pub fn role_can_initiate(role: Role, current: RideStatus, proposed: RideStatus) -> bool {
    if !is_transition_allowed(current, proposed) {
        return false;
    }

    let unaccepted_cancel = current == RideStatus::Requested && proposed == RideStatus::Canceled;

    match role {
        Role::Rider => unaccepted_cancel,
        Role::Driver | Role::Admin => !unaccepted_cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::role_can_initiate;
    use crate::guard::transitions::next_states_for;
    use crate::models::ride::RideStatus as S;
    use crate::models::role::Role;

    #[test]
    fn only_riders_cancel_unaccepted_rides() {
        assert!(role_can_initiate(Role::Rider, S::Requested, S::Canceled));
        assert!(!role_can_initiate(Role::Driver, S::Requested, S::Canceled));
        assert!(!role_can_initiate(Role::Admin, S::Requested, S::Canceled));
    }

    #[test]
    fn drivers_advance_the_trip() {
        assert!(role_can_initiate(Role::Driver, S::Requested, S::Accepted));
        assert!(role_can_initiate(Role::Driver, S::Accepted, S::PickedUp));
        assert!(role_can_initiate(Role::Driver, S::Accepted, S::Canceled));
        assert!(role_can_initiate(Role::Driver, S::PickedUp, S::InTransit));
        assert!(role_can_initiate(Role::Driver, S::InTransit, S::Completed));
    }

    #[test]
    fn riders_cannot_advance_the_trip() {
        assert!(!role_can_initiate(Role::Rider, S::Requested, S::Accepted));
        assert!(!role_can_initiate(Role::Rider, S::Accepted, S::PickedUp));
        assert!(!role_can_initiate(Role::Rider, S::Accepted, S::Canceled));
    }

    #[test]
    fn admin_matches_driver_policy() {
        let mut statuses = S::ALL.to_vec();
        statuses.push(S::Unrecognized);
        for current in &statuses {
            for proposed in &statuses {
                assert_eq!(
                    role_can_initiate(Role::Admin, *current, *proposed),
                    role_can_initiate(Role::Driver, *current, *proposed)
                );
            }
        }
    }

    #[test]
    fn disallowed_transitions_are_blocked_for_every_role() {
        let mut statuses = S::ALL.to_vec();
        statuses.push(S::Unrecognized);
        for current in &statuses {
            let legal = next_states_for(*current);
            for proposed in statuses.iter().filter(|p| !legal.contains(*p)) {
                for role in Role::ALL {
                    assert!(
                        !role_can_initiate(role, *current, *proposed),
                        "{role} must not initiate {current} -> {proposed}"
                    );
                }
            }
        }
    }
}
