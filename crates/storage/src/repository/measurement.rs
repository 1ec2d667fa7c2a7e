use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::measurement::{
    BodyMeasurementRequest, CreateProgressPhotoRequest, CreateWeightEntryRequest,
    UpdateWeightEntryRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{BodyMeasurement, BodyMeasurementField, ProgressPhoto, WeightEntry};

const WEIGHT_COLUMNS: &str = "id, user_id, date, weight, body_fat, created_at, updated_at";

const BODY_COLUMNS: &str = "id, user_id, date, neck, shoulders, forearms, biceps, chest, waist, \
     belly, hips, thighs, calves, notes, created_at, updated_at";

const PHOTO_COLUMNS: &str = "id, user_id, date, photo_url, notes, created_at, updated_at";

pub struct MeasurementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MeasurementRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    async fn delete_from(&self, table: &str, user_id: Uuid, id: Uuid) -> Result<()> {
        let sql = format!("DELETE FROM {table} WHERE id = $1 AND user_id = $2");
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    // Weight entries

    pub async fn list_weight(&self, user_id: Uuid) -> Result<Vec<WeightEntry>> {
        let sql = format!(
            "SELECT {WEIGHT_COLUMNS} FROM weight_entries \
             WHERE user_id = $1 ORDER BY date DESC, created_at DESC"
        );
        let entries = sqlx::query_as::<_, WeightEntry>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(entries)
    }

    pub async fn find_weight(&self, user_id: Uuid, id: Uuid) -> Result<WeightEntry> {
        let sql = format!("SELECT {WEIGHT_COLUMNS} FROM weight_entries WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, WeightEntry>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create_weight(&self, user_id: Uuid, req: &CreateWeightEntryRequest) -> Result<WeightEntry> {
        let sql = format!(
            "INSERT INTO weight_entries (user_id, date, weight, body_fat) \
             VALUES ($1, COALESCE($2::date, CURRENT_DATE), $3, $4) \
             RETURNING {WEIGHT_COLUMNS}"
        );
        sqlx::query_as::<_, WeightEntry>(&sql)
            .bind(user_id)
            .bind(req.date)
            .bind(req.weight)
            .bind(req.body_fat)
            .fetch_one(self.pool)
            .await
            .map_err(StorageError::from_write)
    }

    pub async fn update_weight(
        &self,
        existing: &WeightEntry,
        req: &UpdateWeightEntryRequest,
    ) -> Result<WeightEntry> {
        let sql = format!(
            "UPDATE weight_entries \
             SET date = $3, weight = $4, body_fat = $5, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {WEIGHT_COLUMNS}"
        );
        sqlx::query_as::<_, WeightEntry>(&sql)
            .bind(existing.id)
            .bind(existing.user_id)
            .bind(req.date.unwrap_or(existing.date))
            .bind(req.weight.unwrap_or(existing.weight))
            .bind(req.body_fat.unwrap_or(existing.body_fat))
            .fetch_optional(self.pool)
            .await
            .map_err(StorageError::from_write)?
            .ok_or(StorageError::NotFound)
    }

    pub async fn delete_weight(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        self.delete_from("weight_entries", user_id, id).await
    }

    // Body measurements

    /// Newest first
    pub async fn list_body(&self, user_id: Uuid) -> Result<Vec<BodyMeasurement>> {
        self.latest_body(user_id, None).await
    }

    /// Up to `limit` measurements, newest first; all of them when `limit` is `None`.
    pub async fn latest_body(&self, user_id: Uuid, limit: Option<i64>) -> Result<Vec<BodyMeasurement>> {
        let sql = format!(
            "SELECT {BODY_COLUMNS} FROM body_measurements \
             WHERE user_id = $1 ORDER BY date DESC, created_at DESC \
             LIMIT $2"
        );
        let measurements = sqlx::query_as::<_, BodyMeasurement>(&sql)
            .bind(user_id)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        Ok(measurements)
    }

    pub async fn find_body(&self, user_id: Uuid, id: Uuid) -> Result<BodyMeasurement> {
        let sql = format!("SELECT {BODY_COLUMNS} FROM body_measurements WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, BodyMeasurement>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create_body(&self, user_id: Uuid, req: &BodyMeasurementRequest) -> Result<BodyMeasurement> {
        let sql = format!(
            "INSERT INTO body_measurements \
                 (user_id, date, neck, shoulders, forearms, biceps, chest, waist, belly, hips, \
                  thighs, calves, notes) \
             VALUES ($1, COALESCE($2::date, CURRENT_DATE), $3, $4, $5, $6, $7, $8, $9, $10, \
                     $11, $12, COALESCE($13, '')) \
             RETURNING {BODY_COLUMNS}"
        );
        let mut query = sqlx::query_as::<_, BodyMeasurement>(&sql)
            .bind(user_id)
            .bind(req.date);
        for field in BodyMeasurementField::ALL {
            query = query.bind(req.value(field));
        }
        query
            .bind(req.notes.as_deref())
            .fetch_one(self.pool)
            .await
            .map_err(StorageError::from_write)
    }

    /// Persists a fully merged measurement row.
    pub async fn save_body(&self, measurement: &BodyMeasurement) -> Result<BodyMeasurement> {
        let sql = format!(
            "UPDATE body_measurements \
             SET date = $3, neck = $4, shoulders = $5, forearms = $6, biceps = $7, chest = $8, \
                 waist = $9, belly = $10, hips = $11, thighs = $12, calves = $13, notes = $14, \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {BODY_COLUMNS}"
        );
        let mut query = sqlx::query_as::<_, BodyMeasurement>(&sql)
            .bind(measurement.id)
            .bind(measurement.user_id)
            .bind(measurement.date);
        for field in BodyMeasurementField::ALL {
            query = query.bind(field.get(measurement));
        }
        query
            .bind(&measurement.notes)
            .fetch_optional(self.pool)
            .await
            .map_err(StorageError::from_write)?
            .ok_or(StorageError::NotFound)
    }

    /// Sets one circumference column; `None` clears it.
    pub async fn set_body_field(
        &self,
        user_id: Uuid,
        id: Uuid,
        field: BodyMeasurementField,
        value: Option<Decimal>,
    ) -> Result<BodyMeasurement> {
        let column = field.column();
        let sql = format!(
            "UPDATE body_measurements SET {column} = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {BODY_COLUMNS}"
        );
        sqlx::query_as::<_, BodyMeasurement>(&sql)
            .bind(id)
            .bind(user_id)
            .bind(value)
            .fetch_optional(self.pool)
            .await
            .map_err(StorageError::from_write)?
            .ok_or(StorageError::NotFound)
    }

    pub async fn delete_body(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        self.delete_from("body_measurements", user_id, id).await
    }

    // Progress photos

    pub async fn list_photos(&self, user_id: Uuid) -> Result<Vec<ProgressPhoto>> {
        let sql = format!(
            "SELECT {PHOTO_COLUMNS} FROM progress_photos \
             WHERE user_id = $1 ORDER BY date DESC, created_at DESC"
        );
        let photos = sqlx::query_as::<_, ProgressPhoto>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(photos)
    }

    pub async fn create_photo(&self, user_id: Uuid, req: &CreateProgressPhotoRequest) -> Result<ProgressPhoto> {
        let sql = format!(
            "INSERT INTO progress_photos (user_id, date, photo_url, notes) \
             VALUES ($1, COALESCE($2::date, CURRENT_DATE), $3, $4) \
             RETURNING {PHOTO_COLUMNS}"
        );
        sqlx::query_as::<_, ProgressPhoto>(&sql)
            .bind(user_id)
            .bind(req.date)
            .bind(&req.photo_url)
            .bind(&req.notes)
            .fetch_one(self.pool)
            .await
            .map_err(StorageError::from_write)
    }

    pub async fn delete_photo(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        self.delete_from("progress_photos", user_id, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_weight_past_column_precision_is_a_constraint_violation(pool: PgPool) {
        let repo = MeasurementRepository::new(&pool);
        let req = CreateWeightEntryRequest {
            date: None,
            weight: Decimal::from(12_000),
            body_fat: Decimal::ZERO,
        };

        let result = repo.create_weight(Uuid::new_v4(), &req).await;
        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_weight_entries_are_scoped_by_user(pool: PgPool) {
        let repo = MeasurementRepository::new(&pool);
        let user_id = Uuid::new_v4();
        let req = CreateWeightEntryRequest {
            date: None,
            weight: Decimal::new(8150, 2),
            body_fat: Decimal::new(185, 1),
        };

        let entry = repo.create_weight(user_id, &req).await.unwrap();
        assert_eq!(entry.weight, Decimal::new(8150, 2));

        assert_eq!(repo.list_weight(user_id).await.unwrap().len(), 1);
        assert!(repo.list_weight(Uuid::new_v4()).await.unwrap().is_empty());
        assert!(matches!(
            repo.delete_weight(Uuid::new_v4(), entry.id).await,
            Err(StorageError::NotFound)
        ));
    }
}
