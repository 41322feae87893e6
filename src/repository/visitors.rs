//! Visitors and admins repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::visitor::{Admin, RegisterVisitor, Visitor, VisitorRow},
};

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get visitor by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Visitor> {
        let row = sqlx::query_as::<_, VisitorRow>("SELECT * FROM visitors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visitor with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Get visitor by email (primary authentication lookup)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Visitor>> {
        let row = sqlx::query_as::<_, VisitorRow>(
            "SELECT * FROM visitors WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Get admin by email
    pub async fn get_admin_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT * FROM admins WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    /// Check if email already exists
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM visitors WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Create a new visitor. The unique constraints on email and aadhar_id
    /// surface as a registration conflict.
    pub async fn create(&self, reg: &RegisterVisitor, password_hash: &str) -> AppResult<Visitor> {
        let interests = reg.interests.join(",");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO visitors (
                name, aadhar_id, email, age, gender, phone,
                address, city, pin, interests, password
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&reg.name)
        .bind(&reg.aadhar_id)
        .bind(&reg.email)
        .bind(reg.age)
        .bind(&reg.gender)
        .bind(&reg.phone)
        .bind(&reg.address)
        .bind(&reg.city)
        .bind(&reg.pin)
        .bind(&interests)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::on_unique_violation(e, "Email or Aadhar ID is already registered"))?;

        self.get_by_id(id).await
    }

    /// List all registered visitors, newest first
    pub async fn list(&self) -> AppResult<Vec<Visitor>> {
        let rows = sqlx::query_as::<_, VisitorRow>("SELECT * FROM visitors ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Count registered visitors
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
