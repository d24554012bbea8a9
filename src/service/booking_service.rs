// src/service/booking_service.rs
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    db::{bookingdb::BookingExt, contractordb::ContractorExt, db::DBClient},
    models::bookingmodel::{Booking, BookingStatus},
    service::error::{is_slot_conflict, ServiceError},
};

/// Result of a lifecycle operation. The primary transition either happened or
/// the whole call failed; the follow-up writes (availability refresh, job
/// counter) are best-effort and report degradation through `warnings` instead
/// of failing the request.
#[derive(Debug, Clone, Serialize)]
pub struct BookingOutcome {
    pub booking: Booking,
    pub warnings: Vec<String>,
}

impl BookingOutcome {
    fn clean(booking: Booking) -> Self {
        BookingOutcome {
            booking,
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingService {
    db_client: Arc<DBClient>,
}

impl BookingService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    /// Book a contractor slot. The insert only succeeds when no active
    /// booking holds the same (contractor, date, time); losing a concurrent
    /// race surfaces as the same conflict as an ordinary taken slot.
    pub async fn create_booking(
        &self,
        contractor_id: i64,
        date: String,
        time: String,
        status: BookingStatus,
        price: Option<f64>,
        notes: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<BookingOutcome, ServiceError> {
        self.db_client
            .get_contractor(contractor_id)
            .await?
            .ok_or(ServiceError::ContractorNotFound(contractor_id))?;

        let inserted = self
            .db_client
            .insert_booking_if_slot_free(contractor_id, date, time, status, price, notes, user_id)
            .await
            .map_err(|err| {
                if is_slot_conflict(&err) {
                    ServiceError::SlotTaken
                } else {
                    ServiceError::Database(err)
                }
            })?;

        let booking = inserted.ok_or(ServiceError::SlotTaken)?;

        let mut outcome = BookingOutcome::clean(booking);
        if status.is_active() {
            if let Err(err) = self
                .db_client
                .set_contractor_available(contractor_id, false)
                .await
            {
                tracing::warn!(
                    contractor_id,
                    "booking {} saved but availability flag not updated: {}",
                    outcome.booking.id,
                    err
                );
                outcome
                    .warnings
                    .push("Contractor availability could not be updated".to_string());
            }
        }

        Ok(outcome)
    }

    /// Cancel an active booking, then re-derive the contractor's availability.
    pub async fn cancel_booking(&self, booking_id: i64) -> Result<BookingOutcome, ServiceError> {
        self.transition(booking_id, BookingStatus::Cancelled).await
    }

    /// Demo checkout: mark the booking completed, re-derive availability and
    /// bump the contractor's completed-job counter. No real money moves.
    pub async fn pay_booking(&self, booking_id: i64) -> Result<BookingOutcome, ServiceError> {
        let mut outcome = self.transition(booking_id, BookingStatus::Completed).await?;

        if let Err(err) = self
            .db_client
            .increment_completed_jobs(outcome.booking.contractor_id)
            .await
        {
            tracing::warn!(
                "completed_jobs not incremented for contractor {}: {}",
                outcome.booking.contractor_id,
                err
            );
            outcome
                .warnings
                .push("Completed-job count could not be updated".to_string());
        }

        Ok(outcome)
    }

    async fn transition(
        &self,
        booking_id: i64,
        target: BookingStatus,
    ) -> Result<BookingOutcome, ServiceError> {
        let booking = self
            .db_client
            .get_booking(booking_id)
            .await?
            .ok_or(ServiceError::BookingNotFound(booking_id))?;

        if booking.status.is_terminal() {
            return Err(ServiceError::TerminalBooking(booking_id, booking.status));
        }

        let updated = self
            .db_client
            .update_booking_status(booking_id, target)
            .await?;

        let mut outcome = BookingOutcome::clean(updated);
        if let Err(err) = self
            .db_client
            .refresh_contractor_availability(outcome.booking.contractor_id)
            .await
        {
            tracing::warn!(
                "availability not refreshed for contractor {}: {}",
                outcome.booking.contractor_id,
                err
            );
            outcome
                .warnings
                .push("Contractor availability could not be refreshed".to_string());
        }

        Ok(outcome)
    }
}
