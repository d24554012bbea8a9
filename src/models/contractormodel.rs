// src/models/contractormodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supply side of the marketplace: a service professional's listing.
///
/// `available` is a cached derivative of "no active booking references this
/// contractor"; it is re-derived by the booking lifecycle rather than
/// incremented or decremented.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contractor {
    pub id: i64,
    pub name: String,
    pub service: String,
    pub location: String,
    pub price: String,
    pub rating: f64,
    pub reviews: i32,
    pub completed_jobs: i32,
    pub available: bool,
    pub verified: bool,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}
