use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ride::{Ride, RideRequest, RideStatus};
use crate::upstream::{ApiError, ApiResult, RideApi};

#[derive(Clone)]
pub struct HttpRideApi {
    base_url: String,
    http: Client,
}

#[derive(Serialize)]
struct StatusUpdateBody {
    status: RideStatus,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl HttpRideApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
    let status = res.status();

    if !status.is_success() {
        let raw = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&raw)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or(raw);

        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    res.json()
        .await
        .map_err(|err| ApiError::InvalidResponse(err.to_string()))
}

#[async_trait]
impl RideApi for HttpRideApi {
    async fn list_rides(&self) -> ApiResult<Vec<Ride>> {
        let res = self.http.get(self.url("/rides")).send().await?;
        decode(res).await
    }

    async fn get_ride(&self, id: Uuid) -> ApiResult<Ride> {
        let res = self.http.get(self.url(&format!("/rides/{id}"))).send().await?;
        decode(res).await
    }

    async fn request_ride(&self, request: &RideRequest) -> ApiResult<Ride> {
        let res = self
            .http
            .post(self.url("/rides"))
            .json(request)
            .send()
            .await?;
        decode(res).await
    }

    async fn update_status(&self, id: Uuid, status: RideStatus) -> ApiResult<Ride> {
        let res = self
            .http
            .patch(self.url(&format!("/rides/{id}/status")))
            .json(&StatusUpdateBody { status })
            .send()
            .await?;
        decode(res).await
    }
}
