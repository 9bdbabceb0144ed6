use std::future::Future;
use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::ride::{Ride, RideRequest, RideStatus, StatusChange};
use crate::models::role::Role;
use crate::notify::{publish, Notice, NoticeLevel};
use crate::state::AppState;
use crate::upstream::ApiResult;

pub async fn timed<T, F>(state: &AppState, operation: &str, call: F) -> ApiResult<T>
where
    F: Future<Output = ApiResult<T>>,
{
    let start = Instant::now();
    let result = call.await;
    state
        .metrics
        .upstream_request_seconds
        .with_label_values(&[operation])
        .observe(start.elapsed().as_secs_f64());
    result
}

pub async fn fetch_ride(state: &AppState, ride_id: Uuid) -> Result<Ride, AppError> {
    let ride = timed(state, "get_ride", state.ride_api.get_ride(ride_id)).await?;

    if ride.status == RideStatus::Unrecognized {
        warn!(ride_id = %ride.id, "ride has an unrecognized status; no actions offered");
    }

    state.cache_ride(&ride);
    Ok(ride)
}

pub async fn list_rides(state: &AppState) -> Result<Vec<Ride>, AppError> {
    let rides = timed(state, "list_rides", state.ride_api.list_rides()).await?;

    for ride in &rides {
        state.cache_ride(ride);
    }

    Ok(rides)
}

pub async fn ride_history(state: &AppState, ride_id: Uuid) -> Result<Vec<StatusChange>, AppError> {
    let ride = fetch_ride(state, ride_id).await?;
    let mut history = ride.status_history;
    history.sort_by_key(|change| change.at);
    Ok(history)
}

pub async fn request_ride(
    state: &AppState,
    role: Role,
    request: RideRequest,
) -> Result<Ride, AppError> {
    if role != Role::Rider {
        return Err(AppError::BadRequest(format!(
            "only riders can request rides, got {role}"
        )));
    }

    let ride = timed(state, "request_ride", state.ride_api.request_ride(&request)).await?;
    state.cache_ride(&ride);

    info!(ride_id = %ride.id, fare = ride.fare, "ride requested");
    publish(
        &state.notices_tx,
        Notice::new(NoticeLevel::Success, Some(ride.id), "Ride requested"),
    );

    Ok(ride)
}
