use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Requested,
    Accepted,
    PickedUp,
    InTransit,
    Completed,
    Canceled,
    // Any value outside the known set; has no transitions.
    #[serde(other)]
    Unrecognized,
}

impl RideStatus {
    pub const ALL: [RideStatus; 6] = [
        RideStatus::Requested,
        RideStatus::Accepted,
        RideStatus::PickedUp,
        RideStatus::InTransit,
        RideStatus::Completed,
        RideStatus::Canceled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Requested => "requested",
            RideStatus::Accepted => "accepted",
            RideStatus::PickedUp => "picked_up",
            RideStatus::InTransit => "in_transit",
            RideStatus::Completed => "completed",
            RideStatus::Canceled => "canceled",
            RideStatus::Unrecognized => "unrecognized",
        }
    }

    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or(RideStatus::Unrecognized)
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Canceled)
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RideStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(RideStatus::Requested),
            "accepted" => Ok(RideStatus::Accepted),
            "picked_up" => Ok(RideStatus::PickedUp),
            "in_transit" => Ok(RideStatus::InTransit),
            "completed" => Ok(RideStatus::Completed),
            "canceled" => Ok(RideStatus::Canceled),
            other => Err(format!("unknown ride status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Wallet,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusChange {
    pub status: RideStatus,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: Uuid,
    pub rider_id: Uuid,
    #[serde(default)]
    pub driver_id: Option<Uuid>,
    pub status: RideStatus,
    pub pickup: GeoPoint,
    pub destination: GeoPoint,
    pub fare: f64,
    pub payment_method: PaymentMethod,
    // oldest first
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideRequest {
    pub pickup: GeoPoint,
    pub destination: GeoPoint,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::RideStatus;

    #[test]
    fn unknown_wire_value_deserializes_as_unrecognized() {
        let status: RideStatus = serde_json::from_str("\"teleported\"").unwrap();
        assert_eq!(status, RideStatus::Unrecognized);
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&RideStatus::PickedUp).unwrap(),
            "\"picked_up\""
        );
        assert_eq!(RideStatus::parse_lenient("in_transit"), RideStatus::InTransit);
        assert_eq!(RideStatus::parse_lenient("IN_TRANSIT"), RideStatus::Unrecognized);
    }
}
