// src/models/disputemodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "dispute_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DisputeType {
    Refund,
    Quality,
    Noshow,
    Payment,
    Other,
}

impl std::str::FromStr for DisputeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refund" => Ok(DisputeType::Refund),
            "quality" => Ok(DisputeType::Quality),
            "noshow" => Ok(DisputeType::Noshow),
            "payment" => Ok(DisputeType::Payment),
            "other" => Ok(DisputeType::Other),
            other => Err(format!(
                "Dispute type must be one of refund, quality, noshow, payment, other (got \"{}\")",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "dispute_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Open,
    InReview,
    Resolved,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Dispute {
    pub id: i64,
    pub booking_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub dispute_type: DisputeType,
    pub description: String,
    pub status: DisputeStatus,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
