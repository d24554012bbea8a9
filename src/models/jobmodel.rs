// src/models/jobmodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "job_urgency", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobUrgency {
    Low,
    Normal,
    Urgent,
}

/// Demand side of the marketplace: a homeowner posting work to be done.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: i64,
    pub title: Option<String>,
    pub service: String,
    pub description: String,
    pub location: String,
    pub urgency: JobUrgency,
    pub budget: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
