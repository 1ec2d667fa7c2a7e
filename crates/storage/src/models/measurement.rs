use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct WeightEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: Decimal,
    pub body_fat: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Circumferences in centimetres. Unmeasured sites stay `NULL`.
#[derive(Debug, Clone, Default, FromRow)]
pub struct BodyMeasurement {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub neck: Option<Decimal>,
    pub shoulders: Option<Decimal>,
    pub forearms: Option<Decimal>,
    pub biceps: Option<Decimal>,
    pub chest: Option<Decimal>,
    pub waist: Option<Decimal>,
    pub belly: Option<Decimal>,
    pub hips: Option<Decimal>,
    pub thighs: Option<Decimal>,
    pub calves: Option<Decimal>,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProgressPhoto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub photo_url: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
