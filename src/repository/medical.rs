//! Medical records repository: checkups, treatments and feeding logs

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::medical::{
        CheckupQuery, CreateCheckup, CreateFeedingLog, CreateTreatment, FeedingLog,
        FeedingLogQuery, MedicalCheckup, MedicalTreatment, TreatmentQuery,
    },
    repository::filter::{FilterBuilder, SortSpec},
};

const CHECKUP_SORT: SortSpec = SortSpec {
    allowed: &["checkup_date", "animal_id", "vet_name", "health_status", "weight_kg"],
    default: "checkup_date",
};

const TREATMENT_SORT: SortSpec = SortSpec {
    allowed: &["treatment_date", "animal_id", "diagnosis", "vet_name"],
    default: "treatment_date",
};

const FEEDING_SORT: SortSpec = SortSpec {
    allowed: &["fed_at", "animal_id", "staff_id", "food_type", "quantity_kg"],
    default: "fed_at",
};

#[derive(Clone)]
pub struct MedicalRepository {
    pool: Pool<Postgres>,
}

impl MedicalRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // CHECKUPS
    // =========================================================================

    pub async fn get_checkup(&self, id: i32) -> AppResult<MedicalCheckup> {
        sqlx::query_as::<_, MedicalCheckup>("SELECT * FROM medical_checkups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Checkup with id {} not found", id)))
    }

    pub async fn search_checkups(&self, query: &CheckupQuery) -> AppResult<Vec<MedicalCheckup>> {
        let mut filter = FilterBuilder::new();
        filter.eq_int("animal_id", query.animal_id);
        filter.eq_text("health_status", query.health_status.as_deref());
        filter.eq_text("vet_name", query.vet_name.as_deref());
        filter.min_float("weight_kg", query.min_weight);
        filter.max_float("weight_kg", query.max_weight);
        filter.search(&["vet_name", "health_status", "notes"], query.search.as_deref());

        let (sort_col, sort_dir) =
            CHECKUP_SORT.resolve(query.sort_by.as_deref(), query.order.as_deref());

        let sql = format!(
            "SELECT * FROM medical_checkups WHERE {} ORDER BY {} {}",
            filter.where_clause(),
            sort_col,
            sort_dir
        );

        let checkups = filter
            .bind_to(sqlx::query_as::<_, MedicalCheckup>(&sql))
            .fetch_all(&self.pool)
            .await?;

        Ok(checkups)
    }

    pub async fn create_checkup(&self, checkup: &CreateCheckup) -> AppResult<MedicalCheckup> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO medical_checkups (
                animal_id, checkup_date, vet_name, health_status, weight_kg, notes
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(checkup.animal_id)
        .bind(checkup.checkup_date)
        .bind(&checkup.vet_name)
        .bind(&checkup.health_status)
        .bind(checkup.weight_kg)
        .bind(&checkup.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::on_fk_violation(e, "Animal does not exist"))?;

        self.get_checkup(id).await
    }

    // =========================================================================
    // TREATMENTS
    // =========================================================================

    pub async fn get_treatment(&self, id: i32) -> AppResult<MedicalTreatment> {
        sqlx::query_as::<_, MedicalTreatment>("SELECT * FROM medical_treatments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Treatment with id {} not found", id)))
    }

    pub async fn search_treatments(
        &self,
        query: &TreatmentQuery,
    ) -> AppResult<Vec<MedicalTreatment>> {
        let mut filter = FilterBuilder::new();
        filter.eq_int("animal_id", query.animal_id);
        filter.eq_text("vet_name", query.vet_name.as_deref());
        filter.search(&["diagnosis", "medication", "vet_name"], query.search.as_deref());

        let (sort_col, sort_dir) =
            TREATMENT_SORT.resolve(query.sort_by.as_deref(), query.order.as_deref());

        let sql = format!(
            "SELECT * FROM medical_treatments WHERE {} ORDER BY {} {}",
            filter.where_clause(),
            sort_col,
            sort_dir
        );

        let treatments = filter
            .bind_to(sqlx::query_as::<_, MedicalTreatment>(&sql))
            .fetch_all(&self.pool)
            .await?;

        Ok(treatments)
    }

    pub async fn create_treatment(
        &self,
        treatment: &CreateTreatment,
    ) -> AppResult<MedicalTreatment> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO medical_treatments (
                animal_id, treatment_date, diagnosis, medication, vet_name, notes
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(treatment.animal_id)
        .bind(treatment.treatment_date)
        .bind(&treatment.diagnosis)
        .bind(&treatment.medication)
        .bind(&treatment.vet_name)
        .bind(&treatment.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::on_fk_violation(e, "Animal does not exist"))?;

        self.get_treatment(id).await
    }

    // =========================================================================
    // FEEDING LOGS
    // =========================================================================

    pub async fn get_feeding_log(&self, id: i32) -> AppResult<FeedingLog> {
        sqlx::query_as::<_, FeedingLog>("SELECT * FROM feeding_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Feeding log with id {} not found", id)))
    }

    pub async fn search_feeding_logs(
        &self,
        query: &FeedingLogQuery,
    ) -> AppResult<Vec<FeedingLog>> {
        let mut filter = FilterBuilder::new();
        filter.eq_int("animal_id", query.animal_id);
        filter.eq_int("staff_id", query.staff_id);
        filter.eq_text("food_type", query.food_type.as_deref());
        filter.min_float("quantity_kg", query.min_quantity);
        filter.max_float("quantity_kg", query.max_quantity);
        filter.search(&["food_type", "notes"], query.search.as_deref());

        let (sort_col, sort_dir) =
            FEEDING_SORT.resolve(query.sort_by.as_deref(), query.order.as_deref());

        let sql = format!(
            "SELECT * FROM feeding_logs WHERE {} ORDER BY {} {}",
            filter.where_clause(),
            sort_col,
            sort_dir
        );

        let logs = filter
            .bind_to(sqlx::query_as::<_, FeedingLog>(&sql))
            .fetch_all(&self.pool)
            .await?;

        Ok(logs)
    }

    pub async fn create_feeding_log(&self, log: &CreateFeedingLog) -> AppResult<FeedingLog> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO feeding_logs (
                animal_id, staff_id, fed_at, food_type, quantity_kg, notes
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(log.animal_id)
        .bind(log.staff_id)
        .bind(log.fed_at)
        .bind(&log.food_type)
        .bind(log.quantity_kg)
        .bind(&log.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_foreign_key_violation() {
                    let constraint = db.constraint().unwrap_or_default();
                    if constraint.contains("staff") {
                        return AppError::BadRequest("Staff member does not exist".to_string());
                    }
                    return AppError::BadRequest("Animal does not exist".to_string());
                }
            }
            AppError::Database(e)
        })?;

        self.get_feeding_log(id).await
    }
}
