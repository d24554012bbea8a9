// src/db/contractordb.rs
use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::models::contractormodel::Contractor;

#[async_trait]
pub trait ContractorExt {
    async fn get_contractors(&self, service: Option<String>) -> Result<Vec<Contractor>, Error>;

    async fn get_contractor(&self, contractor_id: i64) -> Result<Option<Contractor>, Error>;

    #[allow(clippy::too_many_arguments)]
    async fn save_contractor(
        &self,
        name: String,
        service: String,
        location: String,
        price: String,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Contractor, Error>;

    async fn set_contractor_available(
        &self,
        contractor_id: i64,
        available: bool,
    ) -> Result<(), Error>;

    /// Re-derive `available` from the booking table in one statement: a
    /// contractor is available exactly when no active booking references them.
    /// Self-heals from any earlier drift.
    async fn refresh_contractor_availability(&self, contractor_id: i64) -> Result<bool, Error>;

    /// Atomic counter bump; avoids the lost-update race of a
    /// read-modify-write from the application.
    async fn increment_completed_jobs(&self, contractor_id: i64) -> Result<(), Error>;

    /// Re-derive `rating` and `reviews` from the reviews table.
    async fn refresh_contractor_rating(&self, contractor_id: i64) -> Result<(), Error>;
}

#[async_trait]
impl ContractorExt for DBClient {
    async fn get_contractors(&self, service: Option<String>) -> Result<Vec<Contractor>, Error> {
        let query = match service {
            Some(service) => sqlx::query_as::<_, Contractor>(
                r#"
                SELECT * FROM contractors
                WHERE LOWER(service) = LOWER($1)
                ORDER BY rating DESC, reviews DESC
                "#,
            )
            .bind(service),
            None => sqlx::query_as::<_, Contractor>(
                r#"
                SELECT * FROM contractors
                ORDER BY rating DESC, reviews DESC
                "#,
            ),
        };

        let contractors = query.fetch_all(&self.pool).await?;
        Ok(contractors)
    }

    async fn get_contractor(&self, contractor_id: i64) -> Result<Option<Contractor>, Error> {
        let contractor = sqlx::query_as::<_, Contractor>(
            r#"
            SELECT * FROM contractors
            WHERE id = $1
            "#,
        )
        .bind(contractor_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contractor)
    }

    async fn save_contractor(
        &self,
        name: String,
        service: String,
        location: String,
        price: String,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Contractor, Error> {
        let contractor = sqlx::query_as::<_, Contractor>(
            r#"
            INSERT INTO contractors (name, service, location, price, description, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(service)
        .bind(location)
        .bind(price)
        .bind(description)
        .bind(image)
        .fetch_one(&self.pool)
        .await?;

        Ok(contractor)
    }

    async fn set_contractor_available(
        &self,
        contractor_id: i64,
        available: bool,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE contractors
            SET available = $1
            WHERE id = $2
            "#,
        )
        .bind(available)
        .bind(contractor_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn refresh_contractor_availability(&self, contractor_id: i64) -> Result<bool, Error> {
        let available: bool = sqlx::query_scalar(
            r#"
            UPDATE contractors
            SET available = NOT EXISTS (
                SELECT 1 FROM bookings
                WHERE contractor_id = $1
                  AND status IN ('upcoming', 'pending')
            )
            WHERE id = $1
            RETURNING available
            "#,
        )
        .bind(contractor_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(available)
    }

    async fn increment_completed_jobs(&self, contractor_id: i64) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE contractors
            SET completed_jobs = completed_jobs + 1
            WHERE id = $1
            "#,
        )
        .bind(contractor_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn refresh_contractor_rating(&self, contractor_id: i64) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE contractors
            SET rating = COALESCE(
                    (SELECT ROUND(AVG(rating)::numeric, 1)::float8
                     FROM reviews WHERE contractor_id = $1),
                    0
                ),
                reviews = (SELECT COUNT(*)::int FROM reviews WHERE contractor_id = $1)
            WHERE id = $1
            "#,
        )
        .bind(contractor_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
