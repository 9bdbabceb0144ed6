use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub ride_id: Option<Uuid>,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, ride_id: Option<Uuid>, message: impl Into<String>) -> Self {
        Self {
            level,
            ride_id,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

pub fn publish(tx: &broadcast::Sender<Notice>, notice: Notice) {
    let _ = tx.send(notice);
}
