use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{CustomExercise, MuscleGroup};

pub const DEFAULT_MET_VALUE: f64 = 6.0;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomExerciseResponse {
    pub id: Uuid,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub description: String,
    pub video_url: String,
    pub is_custom: bool,
    pub met_value: f64,
    pub created_at: NaiveDateTime,
}

impl From<CustomExercise> for CustomExerciseResponse {
    fn from(exercise: CustomExercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
            muscle_group: exercise.muscle_group,
            description: exercise.description,
            video_url: exercise.video_url,
            is_custom: exercise.is_custom,
            met_value: exercise.met_value,
            created_at: exercise.created_at,
        }
    }
}

/// Entry of the combined glossary: built-in exercises carry no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseListItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub met_value: f64,
    pub is_custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl From<CustomExercise> for ExerciseListItem {
    fn from(exercise: CustomExercise) -> Self {
        Self {
            id: Some(exercise.id),
            name: exercise.name,
            muscle_group: exercise.muscle_group,
            met_value: exercise.met_value,
            is_custom: true,
            description: Some(exercise.description),
            video_url: Some(exercise.video_url),
        }
    }
}

fn default_met_value() -> f64 {
    DEFAULT_MET_VALUE
}

fn validate_video_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_url")
            .with_message("Video URL must start with http:// or https://".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomExerciseRequest {
    #[validate(length(min = 1, max = 255, message = "Exercise name is required"))]
    pub name: String,

    #[serde(default)]
    pub muscle_group: MuscleGroup,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_video_url"))]
    pub video_url: String,

    #[serde(default = "default_met_value")]
    #[validate(range(exclusive_min = 0.0, max = 25.0, message = "MET must be between 0 and 25"))]
    pub met_value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomExerciseRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub muscle_group: Option<MuscleGroup>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_video_url"))]
    pub video_url: Option<String>,

    #[validate(range(exclusive_min = 0.0, max = 25.0))]
    pub met_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_defaults() {
        let req: CreateCustomExerciseRequest =
            serde_json::from_value(json!({"name": "Берпи"})).unwrap();
        assert_eq!(req.muscle_group, MuscleGroup::Other);
        assert_eq!(req.met_value, DEFAULT_MET_VALUE);
        assert!(req.video_url.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_met_value_must_be_positive() {
        let req: CreateCustomExerciseRequest =
            serde_json::from_value(json!({"name": "Планка", "metValue": 0})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_builtin_list_item_omits_id() {
        let item = ExerciseListItem {
            id: None,
            name: "Жим лежа".to_string(),
            muscle_group: MuscleGroup::Chest,
            met_value: 6.0,
            is_custom: false,
            description: None,
            video_url: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"name": "Жим лежа", "muscleGroup": "chest", "metValue": 6.0, "isCustom": false})
        );
    }
}
