use std::sync::Arc;

use axum::extract::Query;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::guard::transitions::TransitionEntry;
use crate::guard::{is_transition_allowed, role_can_initiate, TRANSITIONS};
use crate::models::ride::RideStatus;
use crate::models::role::Role;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transitions", get(list_transitions))
        .route("/transitions/check", get(check_transition))
}

#[derive(Deserialize)]
pub struct CheckQuery {
    pub role: Role,
    pub from: String,
    pub to: String,
}

#[derive(Serialize)]
pub struct CheckResponse {
    pub from: RideStatus,
    pub to: RideStatus,
    pub allowed: bool,
    pub role_can_initiate: bool,
}

async fn list_transitions() -> Json<Vec<TransitionEntry>> {
    Json(TRANSITIONS.entries())
}

async fn check_transition(Query(query): Query<CheckQuery>) -> Json<CheckResponse> {
    let from = RideStatus::parse_lenient(&query.from);
    let to = RideStatus::parse_lenient(&query.to);

    Json(CheckResponse {
        from,
        to,
        allowed: is_transition_allowed(from, to),
        role_can_initiate: role_can_initiate(query.role, from, to),
    })
}
