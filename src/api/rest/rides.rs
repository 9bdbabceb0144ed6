use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, patch, post};
use axum::Json;
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use crate::controls::RideControls;
use crate::error::AppError;
use crate::models::ride::{Ride, RideRequest, RideStatus, StatusChange};
use crate::models::role::Role;
use crate::state::AppState;
use crate::workflow::rides::{fetch_ride, list_rides, request_ride, ride_history};
use crate::workflow::status_update::{cancel_ride, submit_status_update};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rides", post(create_ride).get(get_rides))
        .route("/rides/:id", get(get_ride))
        .route("/rides/:id/history", get(get_history))
        .route("/rides/:id/controls", get(get_controls))
        .route("/rides/:id/status", patch(update_status))
        .route("/rides/:id/cancel", post(cancel))
}

#[derive(Deserialize)]
pub struct CreateRideRequest {
    pub role: Role,
    #[serde(flatten)]
    pub ride: RideRequest,
}

#[derive(Deserialize)]
pub struct RoleQuery {
    pub role: Role,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub role: Role,
    pub status: RideStatus,
}

#[derive(Deserialize)]
pub struct CancelRequest {
    pub role: Role,
}

async fn create_ride(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRideRequest>,
) -> Result<Json<Ride>, AppError> {
    let ride = request_ride(&state, payload.role, payload.ride).await?;
    Ok(Json(ride))
}

async fn get_rides(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Ride>>, AppError> {
    Ok(Json(list_rides(&state).await?))
}

async fn get_ride(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ride>, AppError> {
    Ok(Json(fetch_ride(&state, id).await?))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<StatusChange>>, AppError> {
    Ok(Json(ride_history(&state, id).await?))
}

async fn get_controls(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<RoleQuery>,
) -> Result<Json<RideControls>, AppError> {
    let ride = fetch_ride(&state, id).await?;
    Ok(Json(RideControls::for_ride(&ride, query.role)))
}

async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<Ride>, AppError> {
    let ride = submit_status_update(&state, id, payload.role, payload.status).await?;
    Ok(Json(ride))
}

async fn cancel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CancelRequest>,
) -> Result<Json<Ride>, AppError> {
    let ride = cancel_ride(&state, id, payload.role).await?;
    Ok(Json(ride))
}
