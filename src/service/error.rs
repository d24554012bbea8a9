// src/service/error.rs
use thiserror::Error;

use crate::{error::HttpError, models::bookingmodel::BookingStatus};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Contractor {0} not found")]
    ContractorNotFound(i64),

    #[error("Booking {0} not found")]
    BookingNotFound(i64),

    #[error("Booking {0} is already {1:?} and cannot change state")]
    TerminalBooking(i64, BookingStatus),

    #[error("This time slot is already booked for the selected contractor")]
    SlotTaken,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Assistant error: {0}")]
    Assistant(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::ContractorNotFound(_) | ServiceError::BookingNotFound(_) => {
                HttpError::not_found(error.to_string())
            }

            ServiceError::TerminalBooking(_, _) | ServiceError::Validation(_) => {
                HttpError::bad_request(error.to_string())
            }

            ServiceError::SlotTaken => HttpError::conflict(error.to_string()),

            // Internal detail stays in the log; the caller gets a generic
            // message.
            ServiceError::Database(_) | ServiceError::Assistant(_) => {
                tracing::error!("internal error: {}", error);
                HttpError::server_error("Internal server error")
            }
        }
    }
}

/// A unique violation on the active-slot index means another request won the
/// slot between our existence check and the insert.
pub fn is_slot_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint() == Some("bookings_active_slot_idx"),
        _ => false,
    }
}
