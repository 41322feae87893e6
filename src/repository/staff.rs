//! Rangers/staff repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Staff, StaffQuery, StaffRef},
    repository::filter::{FilterBuilder, SortSpec},
};

const SORT: SortSpec = SortSpec {
    allowed: &["name", "employee_id", "age", "assigned_zone", "experience_years", "shift", "role"],
    default: "name",
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get staff member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>("SELECT * FROM rangers_staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff member with id {} not found", id)))
    }

    /// Search staff with optional filters and allow-listed sort
    pub async fn search(&self, query: &StaffQuery) -> AppResult<Vec<Staff>> {
        let mut filter = FilterBuilder::new();
        filter.eq_text("role", query.role.as_deref());
        filter.eq_text("shift", query.shift.as_deref());
        filter.eq_text("category", query.category.as_deref());
        filter.eq_text("assigned_zone", query.assigned_zone.as_deref());
        filter.min_int("experience_years", query.min_experience);
        filter.max_int("experience_years", query.max_experience);
        filter.min_int("age", query.min_age);
        filter.max_int("age", query.max_age);
        filter.search(&["name", "role", "category"], query.search.as_deref());

        let (sort_col, sort_dir) = SORT.resolve(query.sort_by.as_deref(), query.order.as_deref());

        let sql = format!(
            "SELECT * FROM rangers_staff WHERE {} ORDER BY {} {}",
            filter.where_clause(),
            sort_col,
            sort_dir
        );

        let staff = filter
            .bind_to(sqlx::query_as::<_, Staff>(&sql))
            .fetch_all(&self.pool)
            .await?;

        Ok(staff)
    }

    /// Id+name list for form selects
    pub async fn lookup(&self) -> AppResult<Vec<StaffRef>> {
        let refs = sqlx::query_as::<_, StaffRef>(
            "SELECT id, employee_id, name FROM rangers_staff ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(refs)
    }

    /// Hire a new staff member. Employee id is unique.
    pub async fn create(&self, staff: &CreateStaff) -> AppResult<Staff> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO rangers_staff (
                employee_id, name, age, gender, assigned_zone,
                experience_years, shift, role, category
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&staff.employee_id)
        .bind(&staff.name)
        .bind(staff.age)
        .bind(&staff.gender)
        .bind(&staff.assigned_zone)
        .bind(staff.experience_years)
        .bind(&staff.shift)
        .bind(&staff.role)
        .bind(&staff.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict("Employee ID already exists".to_string());
                }
                if db.is_foreign_key_violation() {
                    return AppError::BadRequest("Assigned zone does not exist".to_string());
                }
            }
            AppError::Database(e)
        })?;

        self.get_by_id(id).await
    }
}
