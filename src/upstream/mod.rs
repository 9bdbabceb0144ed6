pub mod client;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::ride::{Ride, RideRequest, RideStatus};

pub use client::HttpRideApi;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("ride api rejected request: {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait RideApi: Send + Sync {
    async fn list_rides(&self) -> ApiResult<Vec<Ride>>;

    async fn get_ride(&self, id: Uuid) -> ApiResult<Ride>;

    async fn request_ride(&self, request: &RideRequest) -> ApiResult<Ride>;

    async fn update_status(&self, id: Uuid, status: RideStatus) -> ApiResult<Ride>;
}
