// src/models/bookingmodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use uuid::Uuid;

/// Lifecycle: upcoming/pending (active) -> cancelled | completed (terminal).
/// There is no transition out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Upcoming,
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Active bookings occupy a slot and keep the contractor unavailable.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Upcoming | BookingStatus::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(BookingStatus::Upcoming),
            "pending" => Ok(BookingStatus::Pending),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!(
                "Status must be one of upcoming, pending, completed, cancelled (got \"{}\")",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub contractor_id: i64,
    pub date: String,
    pub time: String,
    pub status: BookingStatus,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookingWithContractor {
    #[sqlx(flatten)]
    pub booking: Booking,
    pub contractor_name: String,
    pub contractor_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_statuses_occupy_a_slot() {
        assert!(BookingStatus::Upcoming.is_active());
        assert!(BookingStatus::Pending.is_active());
        assert!(!BookingStatus::Completed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }

    #[test]
    fn terminal_is_the_complement_of_active() {
        for status in [
            BookingStatus::Upcoming,
            BookingStatus::Pending,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.is_terminal(), !status.is_active());
        }
    }

    #[test]
    fn status_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
        assert_eq!(
            serde_json::from_str::<BookingStatus>("\"cancelled\"").unwrap(),
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn status_parses_from_the_allow_list_only() {
        assert_eq!("upcoming".parse::<BookingStatus>(), Ok(BookingStatus::Upcoming));
        assert_eq!(" Pending ".parse::<BookingStatus>(), Ok(BookingStatus::Pending));
        assert!("archived".parse::<BookingStatus>().is_err());
    }
}
