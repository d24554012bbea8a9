// src/db/reviewdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::reviewmodel::Review;

#[async_trait]
pub trait ReviewExt {
    async fn create_review(
        &self,
        booking_id: i64,
        contractor_id: i64,
        rating: i32,
        comment: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<Review, Error>;

    async fn get_contractor_reviews(&self, contractor_id: i64) -> Result<Vec<Review>, Error>;
}

#[async_trait]
impl ReviewExt for DBClient {
    async fn create_review(
        &self,
        booking_id: i64,
        contractor_id: i64,
        rating: i32,
        comment: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<Review, Error> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (booking_id, contractor_id, rating, comment, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(contractor_id)
        .bind(rating)
        .bind(comment)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    async fn get_contractor_reviews(&self, contractor_id: i64) -> Result<Vec<Review>, Error> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE contractor_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(contractor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }
}
