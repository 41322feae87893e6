//! Feedback repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::feedback::{CreateFeedback, Feedback, FeedbackRow},
};

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: Pool<Postgres>,
}

impl FeedbackRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get feedback by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Feedback> {
        let row = sqlx::query_as::<_, FeedbackRow>("SELECT * FROM feedbacks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Feedback with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Insert a feedback entry. A booking reference that does not exist
    /// fails the insert with a foreign-key violation.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        feedback: &CreateFeedback,
    ) -> AppResult<Feedback> {
        let sightings = serde_json::to_string(&feedback.sightings)
            .map_err(|e| AppError::Internal(format!("Failed to serialize sightings: {}", e)))?;
        let liked_most = serde_json::to_string(&feedback.liked_most)
            .map_err(|e| AppError::Internal(format!("Failed to serialize liked_most: {}", e)))?;
        let recommend = if feedback.recommend { "yes" } else { "no" };

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO feedbacks (
                name, email, visit_date, booking_id,
                rating_overall, rating_guide, rating_facility,
                sightings, liked_most, comments, recommend
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(feedback.visit_date)
        .bind(&feedback.booking_id)
        .bind(feedback.rating_overall)
        .bind(feedback.rating_guide)
        .bind(feedback.rating_facility)
        .bind(&sightings)
        .bind(&liked_most)
        .bind(&feedback.comments)
        .bind(recommend)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::on_fk_violation(e, "Booking Id does not exist"))?;

        self.get_by_id(id).await
    }

    /// All feedback entries, newest first
    pub async fn list(&self) -> AppResult<Vec<Feedback>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            "SELECT * FROM feedbacks ORDER BY submitted_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Average overall rating across all feedback
    pub async fn average_rating(&self) -> AppResult<f64> {
        let avg: f64 = sqlx::query_scalar(
            "SELECT COALESCE(AVG(rating_overall)::float8, 0) FROM feedbacks",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(avg)
    }

    /// Number of visitors who would recommend the reserve
    pub async fn recommend_count(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM feedbacks WHERE recommend = 'yes'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
