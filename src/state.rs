use std::sync::Arc;

use dashmap::{DashMap, DashSet};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::ride::Ride;
use crate::notify::Notice;
use crate::observability::metrics::Metrics;
use crate::upstream::RideApi;

pub struct AppState {
    // Last copy seen from the ride API; terminal rides are evicted.
    pub rides: DashMap<Uuid, Ride>,
    pub in_flight: DashSet<Uuid>,
    pub ride_api: Arc<dyn RideApi>,
    pub notices_tx: broadcast::Sender<Notice>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(ride_api: Arc<dyn RideApi>, event_buffer_size: usize) -> Self {
        let (notices_tx, _unused_rx) = broadcast::channel(event_buffer_size);

        Self {
            rides: DashMap::new(),
            in_flight: DashSet::new(),
            ride_api,
            notices_tx,
            metrics: Metrics::new(),
        }
    }

    pub fn cache_ride(&self, ride: &Ride) {
        if ride.status.is_terminal() {
            self.rides.remove(&ride.id);
        } else {
            self.rides.insert(ride.id, ride.clone());
        }
    }
}
