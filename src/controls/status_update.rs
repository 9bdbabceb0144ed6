use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::guard::{is_transition_allowed, next_states_for, role_can_initiate};
use crate::models::ride::{Ride, RideStatus};
use crate::models::role::Role;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusUpdateControl {
    pub ride_id: Uuid,
    pub current: RideStatus,
    pub options: Vec<RideStatus>,
    pub default: RideStatus,
}

impl StatusUpdateControl {
    pub fn open(ride: &Ride, role: Role) -> Option<Self> {
        let options: Vec<RideStatus> = next_states_for(ride.status)
            .iter()
            .copied()
            .filter(|proposed| role_can_initiate(role, ride.status, *proposed))
            .collect();

        let default = *options.first()?;

        Some(Self {
            ride_id: ride.id,
            current: ride.status,
            options,
            default,
        })
    }
}

pub fn check(role: Role, current: RideStatus, proposed: RideStatus) -> Result<(), AppError> {
    if !is_transition_allowed(current, proposed) {
        return Err(AppError::InvalidTransition {
            from: current,
            to: proposed,
        });
    }

    if !role_can_initiate(role, current, proposed) {
        return Err(AppError::Forbidden {
            role,
            from: current,
            to: proposed,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{check, StatusUpdateControl};
    use crate::error::AppError;
    use crate::models::ride::{GeoPoint, PaymentMethod, Ride, RideStatus as S};
    use crate::models::role::Role;

    fn ride(status: S) -> Ride {
        Ride {
            id: Uuid::from_u128(1),
            rider_id: Uuid::from_u128(2),
            driver_id: None,
            status,
            pickup: GeoPoint { lat: 52.52, lng: 13.405 },
            destination: GeoPoint { lat: 52.50, lng: 13.39 },
            fare: 9.0,
            payment_method: PaymentMethod::Cash,
            status_history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn driver_on_requested_ride_defaults_to_accept() {
        let control = StatusUpdateControl::open(&ride(S::Requested), Role::Driver).unwrap();
        assert_eq!(control.options, vec![S::Accepted]);
        assert_eq!(control.default, S::Accepted);
    }

    #[test]
    fn driver_on_accepted_ride_sees_pickup_then_cancel() {
        let control = StatusUpdateControl::open(&ride(S::Accepted), Role::Driver).unwrap();
        assert_eq!(control.options, vec![S::PickedUp, S::Canceled]);
        assert_eq!(control.default, S::PickedUp);
    }

    #[test]
    fn no_control_for_terminal_or_unknown_rides() {
        assert!(StatusUpdateControl::open(&ride(S::Completed), Role::Driver).is_none());
        assert!(StatusUpdateControl::open(&ride(S::Canceled), Role::Admin).is_none());
        assert!(StatusUpdateControl::open(&ride(S::Unrecognized), Role::Driver).is_none());
    }

    #[test]
    fn rider_only_gets_cancel_on_requested() {
        let control = StatusUpdateControl::open(&ride(S::Requested), Role::Rider).unwrap();
        assert_eq!(control.options, vec![S::Canceled]);
        assert!(StatusUpdateControl::open(&ride(S::Accepted), Role::Rider).is_none());
    }

    #[test]
    fn check_separates_table_and_role_failures() {
        assert!(check(Role::Driver, S::Accepted, S::PickedUp).is_ok());
        assert!(matches!(
            check(Role::Driver, S::Accepted, S::InTransit),
            Err(AppError::InvalidTransition { .. })
        ));
        assert!(matches!(
            check(Role::Driver, S::Requested, S::Canceled),
            Err(AppError::Forbidden { .. })
        ));
    }
}
