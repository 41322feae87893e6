//! Animals repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::animal::{Animal, AnimalQuery, AnimalRef, CreateAnimal},
    repository::filter::{FilterBuilder, SortSpec},
};

const SORT: SortSpec = SortSpec {
    allowed: &["name", "species_id", "status", "count", "habitat_zone", "last_survey"],
    default: "name",
};

#[derive(Clone)]
pub struct AnimalsRepository {
    pool: Pool<Postgres>,
}

impl AnimalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get animal by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Animal> {
        sqlx::query_as::<_, Animal>("SELECT * FROM animals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Animal with id {} not found", id)))
    }

    /// Find the population record for a named animal in a zone
    pub async fn find_by_name_and_zone(
        &self,
        name: &str,
        habitat_zone: &str,
    ) -> AppResult<Option<Animal>> {
        let animal = sqlx::query_as::<_, Animal>(
            "SELECT * FROM animals WHERE LOWER(name) = LOWER($1) AND habitat_zone = $2",
        )
        .bind(name)
        .bind(habitat_zone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(animal)
    }

    /// Search animals with optional filters and allow-listed sort
    pub async fn search(&self, query: &AnimalQuery) -> AppResult<Vec<Animal>> {
        let mut filter = FilterBuilder::new();
        filter.eq_text("status", query.status.as_deref());
        filter.eq_text("habitat_zone", query.habitat_zone.as_deref());
        filter.eq_int("species_id", query.species_id);
        filter.min_int("count", query.min_count);
        filter.max_int("count", query.max_count);
        filter.search(&["name", "status", "habitat_zone"], query.search.as_deref());

        let (sort_col, sort_dir) = SORT.resolve(query.sort_by.as_deref(), query.order.as_deref());

        let sql = format!(
            "SELECT * FROM animals WHERE {} ORDER BY {} {}",
            filter.where_clause(),
            sort_col,
            sort_dir
        );

        let animals = filter
            .bind_to(sqlx::query_as::<_, Animal>(&sql))
            .fetch_all(&self.pool)
            .await?;

        Ok(animals)
    }

    /// Id+name list for form selects
    pub async fn lookup(&self) -> AppResult<Vec<AnimalRef>> {
        let refs = sqlx::query_as::<_, AnimalRef>(
            "SELECT id, name, habitat_zone FROM animals ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(refs)
    }

    /// Create a new animal record (direct-insert variant)
    pub async fn create(&self, animal: &CreateAnimal) -> AppResult<Animal> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO animals (
                name, species_id, status, count, habitat_zone, last_survey, image_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&animal.name)
        .bind(animal.species_id)
        .bind(&animal.status)
        .bind(animal.count)
        .bind(&animal.habitat_zone)
        .bind(animal.last_survey)
        .bind(&animal.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict(format!(
                        "Animal {} already exists in zone {}",
                        animal.name, animal.habitat_zone
                    ));
                }
                if db.is_foreign_key_violation() {
                    return AppError::BadRequest("Habitat zone does not exist".to_string());
                }
            }
            AppError::Database(e)
        })?;

        self.get_by_id(id).await
    }

    /// Update count and survey date from a survey log
    pub async fn record_survey(
        &self,
        id: i32,
        count: i32,
        status: &str,
        survey_date: NaiveDate,
    ) -> AppResult<Animal> {
        sqlx::query(
            r#"
            UPDATE animals
            SET count = $1, status = $2, last_survey = $3, updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(count)
        .bind(status)
        .bind(survey_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Total tracked animals (sum of population counts)
    pub async fn total_count(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(count), 0) FROM animals")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Number of distinct species tracked
    pub async fn species_count(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT species_id) FROM animals")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
