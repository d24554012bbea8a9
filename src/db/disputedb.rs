// src/db/disputedb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::disputemodel::{Dispute, DisputeStatus, DisputeType};

#[async_trait]
pub trait DisputeExt {
    async fn get_disputes(&self) -> Result<Vec<Dispute>, Error>;

    #[allow(clippy::too_many_arguments)]
    async fn create_dispute(
        &self,
        booking_id: Option<i64>,
        name: Option<String>,
        email: Option<String>,
        dispute_type: DisputeType,
        description: String,
        user_id: Option<Uuid>,
    ) -> Result<Dispute, Error>;
}

#[async_trait]
impl DisputeExt for DBClient {
    async fn get_disputes(&self) -> Result<Vec<Dispute>, Error> {
        let disputes = sqlx::query_as::<_, Dispute>(
            r#"
            SELECT * FROM disputes
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(disputes)
    }

    async fn create_dispute(
        &self,
        booking_id: Option<i64>,
        name: Option<String>,
        email: Option<String>,
        dispute_type: DisputeType,
        description: String,
        user_id: Option<Uuid>,
    ) -> Result<Dispute, Error> {
        let dispute = sqlx::query_as::<_, Dispute>(
            r#"
            INSERT INTO disputes (booking_id, name, email, dispute_type, description, status, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(name)
        .bind(email)
        .bind(dispute_type)
        .bind(description)
        .bind(DisputeStatus::Open)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(dispute)
    }
}
