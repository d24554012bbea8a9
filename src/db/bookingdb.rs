// src/db/bookingdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::bookingmodel::{Booking, BookingStatus, BookingWithContractor};

#[async_trait]
pub trait BookingExt {
    async fn get_bookings(&self) -> Result<Vec<BookingWithContractor>, Error>;

    async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, Error>;

    /// Conditional insert: writes the booking only when no active booking
    /// already holds the (contractor, date, time) slot. Returns `None` on a
    /// conflict. The partial unique index `bookings_active_slot_idx` backs
    /// this up under concurrent requests.
    #[allow(clippy::too_many_arguments)]
    async fn insert_booking_if_slot_free(
        &self,
        contractor_id: i64,
        date: String,
        time: String,
        status: BookingStatus,
        price: Option<f64>,
        notes: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<Option<Booking>, Error>;

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, Error>;
}

#[async_trait]
impl BookingExt for DBClient {
    async fn get_bookings(&self) -> Result<Vec<BookingWithContractor>, Error> {
        let bookings = sqlx::query_as::<_, BookingWithContractor>(
            r#"
            SELECT
                b.*,
                c.name as contractor_name,
                c.image as contractor_image
            FROM bookings b
            JOIN contractors c ON b.contractor_id = c.id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, Error> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn insert_booking_if_slot_free(
        &self,
        contractor_id: i64,
        date: String,
        time: String,
        status: BookingStatus,
        price: Option<f64>,
        notes: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<Option<Booking>, Error> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (contractor_id, date, time, status, price, notes, user_id)
            SELECT $1, $2, $3, $4, $5, $6, $7
            WHERE NOT EXISTS (
                SELECT 1 FROM bookings
                WHERE contractor_id = $1
                  AND date = $2
                  AND time = $3
                  AND status IN ('upcoming', 'pending')
            )
            RETURNING *
            "#,
        )
        .bind(contractor_id)
        .bind(date)
        .bind(time)
        .bind(status)
        .bind(price)
        .bind(notes)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, Error> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $1
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(booking_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }
}
