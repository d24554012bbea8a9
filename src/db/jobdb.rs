// src/db/jobdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::jobmodel::{Job, JobUrgency};

#[async_trait]
pub trait JobExt {
    async fn get_jobs(&self) -> Result<Vec<Job>, Error>;

    #[allow(clippy::too_many_arguments)]
    async fn create_job(
        &self,
        title: Option<String>,
        service: String,
        description: String,
        location: String,
        urgency: JobUrgency,
        budget: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<Job, Error>;
}

#[async_trait]
impl JobExt for DBClient {
    async fn get_jobs(&self) -> Result<Vec<Job>, Error> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    async fn create_job(
        &self,
        title: Option<String>,
        service: String,
        description: String,
        location: String,
        urgency: JobUrgency,
        budget: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<Job, Error> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (title, service, description, location, urgency, budget, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(service)
        .bind(description)
        .bind(location)
        .bind(urgency)
        .bind(budget)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }
}
