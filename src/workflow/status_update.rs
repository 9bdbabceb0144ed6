use tracing::{error, info, warn};
use uuid::Uuid;

use crate::controls::status_update::check;
use crate::controls::CancelControl;
use crate::error::AppError;
use crate::models::ride::{Ride, RideStatus};
use crate::models::role::Role;
use crate::notify::{publish, Notice, NoticeLevel};
use crate::state::AppState;
use crate::workflow::rides::{fetch_ride, timed};

struct InFlight<'a> {
    state: &'a AppState,
    ride_id: Uuid,
}

impl<'a> InFlight<'a> {
    fn reserve(state: &'a AppState, ride_id: Uuid) -> Result<Self, AppError> {
        if !state.in_flight.insert(ride_id) {
            return Err(AppError::Conflict(format!(
                "status update already in flight for ride {ride_id}"
            )));
        }

        state.metrics.status_updates_in_flight.inc();
        Ok(Self { state, ride_id })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.in_flight.remove(&self.ride_id);
        self.state.metrics.status_updates_in_flight.dec();
    }
}

fn reject(state: &AppState, ride_id: Uuid, err: AppError) -> AppError {
    let decision = match &err {
        AppError::InvalidTransition { .. } => "invalid_transition",
        AppError::Forbidden { .. } => "forbidden",
        AppError::Conflict(_) => "in_flight",
        _ => "error",
    };

    state
        .metrics
        .guard_decisions_total
        .with_label_values(&[decision])
        .inc();

    warn!(ride_id = %ride_id, decision, error = %err, "status update blocked");
    publish(
        &state.notices_tx,
        Notice::new(NoticeLevel::Warning, Some(ride_id), err.to_string()),
    );

    err
}

// The in-flight slot is held from the read until the ride API answers.
pub async fn submit_status_update(
    state: &AppState,
    ride_id: Uuid,
    role: Role,
    proposed: RideStatus,
) -> Result<Ride, AppError> {
    let _reservation = reserve(state, ride_id)?;
    let ride = fetch_ride(state, ride_id).await?;

    if let Err(err) = check(role, ride.status, proposed) {
        return Err(reject(state, ride_id, err));
    }

    forward(state, &ride, role, proposed).await
}

pub async fn cancel_ride(state: &AppState, ride_id: Uuid, role: Role) -> Result<Ride, AppError> {
    let _reservation = reserve(state, ride_id)?;
    let ride = fetch_ride(state, ride_id).await?;

    if CancelControl::for_ride(&ride, role).is_none() {
        let err = match check(role, ride.status, RideStatus::Canceled) {
            Err(err) => err,
            Ok(()) => AppError::Forbidden {
                role,
                from: ride.status,
                to: RideStatus::Canceled,
            },
        };
        return Err(reject(state, ride_id, err));
    }

    forward(state, &ride, role, RideStatus::Canceled).await
}

fn reserve(state: &AppState, ride_id: Uuid) -> Result<InFlight<'_>, AppError> {
    InFlight::reserve(state, ride_id).map_err(|err| reject(state, ride_id, err))
}

async fn forward(
    state: &AppState,
    ride: &Ride,
    role: Role,
    proposed: RideStatus,
) -> Result<Ride, AppError> {
    state
        .metrics
        .guard_decisions_total
        .with_label_values(&["allowed"])
        .inc();

    match timed(
        state,
        "update_status",
        state.ride_api.update_status(ride.id, proposed),
    )
    .await
    {
        Ok(updated) => {
            state.cache_ride(&updated);
            state
                .metrics
                .status_updates_total
                .with_label_values(&["success"])
                .inc();

            info!(
                ride_id = %ride.id,
                %role,
                from = %ride.status,
                to = %updated.status,
                "ride status updated"
            );
            publish(
                &state.notices_tx,
                Notice::new(
                    NoticeLevel::Success,
                    Some(ride.id),
                    format!("Ride status updated to {}", updated.status),
                ),
            );

            Ok(updated)
        }
        Err(err) => {
            state
                .metrics
                .status_updates_total
                .with_label_values(&["error"])
                .inc();

            error!(ride_id = %ride.id, to = %proposed, error = %err, "ride api rejected status update");
            let err = AppError::from(err);
            publish(
                &state.notices_tx,
                Notice::new(NoticeLevel::Error, Some(ride.id), err.to_string()),
            );

            Err(err)
        }
    }
}
