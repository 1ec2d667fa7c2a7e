use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{BodyMeasurement, BodyMeasurementField, ProgressPhoto, WeightEntry};

/// Upper bound of the `NUMERIC(6, 2)` weight and circumference columns.
const MAX_MEASUREMENT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

const MAX_BODY_FAT: Decimal = Decimal::ONE_HUNDRED;

fn validate_body_weight(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO || *value >= MAX_MEASUREMENT {
        return Err(ValidationError::new("out_of_range")
            .with_message("Weight must be greater than 0 and below 10000".into()));
    }
    Ok(())
}

fn validate_body_fat(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > MAX_BODY_FAT {
        return Err(ValidationError::new("out_of_range")
            .with_message("Body fat must be between 0 and 100".into()));
    }
    Ok(())
}

fn validate_circumference(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value >= MAX_MEASUREMENT {
        return Err(ValidationError::new("out_of_range")
            .with_message("Measurement must be between 0 and 10000".into()));
    }
    Ok(())
}

// Weight

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntryResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub weight: Decimal,
    pub body_fat: Decimal,
    pub created_at: NaiveDateTime,
}

impl From<WeightEntry> for WeightEntryResponse {
    fn from(entry: WeightEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            weight: entry.weight,
            body_fat: entry.body_fat,
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeightEntryRequest {
    pub date: Option<NaiveDate>,

    #[validate(custom(function = "validate_body_weight"))]
    pub weight: Decimal,

    #[serde(default)]
    #[validate(custom(function = "validate_body_fat"))]
    pub body_fat: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWeightEntryRequest {
    pub date: Option<NaiveDate>,

    #[validate(custom(function = "validate_body_weight"))]
    pub weight: Option<Decimal>,

    #[validate(custom(function = "validate_body_fat"))]
    pub body_fat: Option<Decimal>,
}

// Body measurements

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurementResponse {
    pub id: Uuid,
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
}

impl From<BodyMeasurement> for BodyMeasurementResponse {
    fn from(m: BodyMeasurement) -> Self {
        Self {
            id: m.id,
            date: m.date,
            neck: m.neck,
            shoulders: m.shoulders,
            forearms: m.forearms,
            biceps: m.biceps,
            chest: m.chest,
            waist: m.waist,
            belly: m.belly,
            hips: m.hips,
            thighs: m.thighs,
            calves: m.calves,
            notes: m.notes,
            created_at: m.created_at,
        }
    }
}

/// Create and update share one shape: absent sites are left unmeasured on
/// create and untouched on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurementRequest {
    pub date: Option<NaiveDate>,
    #[validate(custom(function = "validate_circumference"))]
    pub neck: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub shoulders: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub forearms: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub biceps: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub chest: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub waist: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub belly: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub hips: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub thighs: Option<Decimal>,
    #[validate(custom(function = "validate_circumference"))]
    pub calves: Option<Decimal>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl BodyMeasurementRequest {
    pub fn value(&self, field: BodyMeasurementField) -> Option<Decimal> {
        match field {
            BodyMeasurementField::Neck => self.neck,
            BodyMeasurementField::Shoulders => self.shoulders,
            BodyMeasurementField::Forearms => self.forearms,
            BodyMeasurementField::Biceps => self.biceps,
            BodyMeasurementField::Chest => self.chest,
            BodyMeasurementField::Waist => self.waist,
            BodyMeasurementField::Belly => self.belly,
            BodyMeasurementField::Hips => self.hips,
            BodyMeasurementField::Thighs => self.thighs,
            BodyMeasurementField::Calves => self.calves,
        }
    }

    /// Applies the present fields on top of an existing row.
    pub fn merge_into(&self, existing: &BodyMeasurement) -> BodyMeasurement {
        let mut merged = existing.clone();
        if let Some(date) = self.date {
            merged.date = date;
        }
        for field in BodyMeasurementField::ALL {
            if let Some(value) = self.value(field) {
                field.set(&mut merged, Some(value));
            }
        }
        if let Some(notes) = &self.notes {
            merged.notes = notes.clone();
        }
        merged
    }
}

/// Body of `PATCH /measurements/body/{id}/fields/{field}`. `null` clears the site.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MeasurementFieldUpdate {
    #[validate(custom(function = "validate_circumference"))]
    pub value: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldChange {
    pub field: BodyMeasurementField,
    pub previous: Decimal,
    pub current: Decimal,
    /// `current - previous`
    pub change: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementChangesResponse {
    pub previous_date: Option<NaiveDate>,
    pub current_date: Option<NaiveDate>,
    pub changes: Vec<FieldChange>,
}

// Photos

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPhotoResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub photo_url: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

impl From<ProgressPhoto> for ProgressPhotoResponse {
    fn from(photo: ProgressPhoto) -> Self {
        Self {
            id: photo.id,
            date: photo.date,
            photo_url: photo.photo_url,
            notes: photo.notes,
            created_at: photo.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgressPhotoRequest {
    pub date: Option<NaiveDate>,

    #[validate(url(message = "Photo URL must be a valid URL"))]
    #[validate(length(max = 2000))]
    pub photo_url: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: String,
}
