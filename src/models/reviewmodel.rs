// src/models/reviewmodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub booking_id: i64,
    pub contractor_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
