pub mod cancel;
pub mod status_update;

use serde::Serialize;

pub use cancel::CancelControl;
pub use status_update::StatusUpdateControl;

use crate::models::ride::Ride;
use crate::models::role::Role;

#[derive(Debug, Clone, Serialize)]
pub struct RideControls {
    pub status_update: Option<StatusUpdateControl>,
    pub cancel: Option<CancelControl>,
}

impl RideControls {
    pub fn for_ride(ride: &Ride, role: Role) -> Self {
        Self {
            status_update: StatusUpdateControl::open(ride, role),
            cancel: CancelControl::for_ride(ride, role),
        }
    }
}
