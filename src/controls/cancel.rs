use serde::Serialize;
use uuid::Uuid;

use crate::guard::role_can_initiate;
use crate::models::ride::{Ride, RideStatus};
use crate::models::role::Role;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CancelControl {
    pub ride_id: Uuid,
}

impl CancelControl {
    pub fn for_ride(ride: &Ride, role: Role) -> Option<Self> {
        let visible =
            role == Role::Rider && role_can_initiate(role, ride.status, RideStatus::Canceled);

        visible.then_some(Self { ride_id: ride.id })
    }
}
