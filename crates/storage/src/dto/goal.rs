use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Goal, GoalCategory};
use crate::services::goal_progress::progress_percent;

pub const DEFAULT_GOAL_COLOR: &str = "#4ECDC4";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub target_value: Decimal,
    pub current_value: Decimal,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub color: String,
    pub category: GoalCategory,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    /// `current / target` as a percentage, clamped to 0..=100
    pub progress: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            progress: progress_percent(goal.current_value, goal.target_value),
            id: goal.id,
            title: goal.title,
            description: goal.description,
            target_value: goal.target_value,
            current_value: goal.current_value,
            unit: goal.unit,
            deadline: goal.deadline,
            color: goal.color,
            category: goal.category,
            completed: goal.completed,
            completed_at: goal.completed_at,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

fn default_color() -> String {
    DEFAULT_GOAL_COLOR.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,

    #[validate(custom(function = "validate_goal_value"))]
    pub target_value: Decimal,

    #[serde(default)]
    #[validate(custom(function = "validate_goal_value"))]
    pub current_value: Decimal,

    #[validate(length(min = 1, max = 50, message = "Unit is required"))]
    pub unit: String,

    pub deadline: Option<NaiveDate>,

    #[serde(default = "default_color")]
    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,

    #[serde(default)]
    pub category: GoalCategory,

    #[serde(default)]
    pub completed: bool,

    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_goal_value"))]
    pub target_value: Option<Decimal>,

    #[validate(custom(function = "validate_goal_value"))]
    pub current_value: Option<Decimal>,

    #[validate(length(min = 1, max = 50))]
    pub unit: Option<String>,

    pub deadline: Option<NaiveDate>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,

    pub category: Option<GoalCategory>,

    pub completed: Option<bool>,

    pub completed_at: Option<NaiveDateTime>,
}

/// Magnitude limit of the `NUMERIC(10, 2)` goal columns.
const MAX_GOAL_VALUE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

fn validate_goal_value(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.abs() >= MAX_GOAL_VALUE {
        return Err(validator::ValidationError::new("out_of_range")
            .with_message("Goal values must stay below 100000000".into()));
    }
    Ok(())
}

fn validate_hex_color(color: &str) -> Result<(), validator::ValidationError> {
    let digits = color.strip_prefix('#').unwrap_or("");
    if matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_color")
            .with_message("Color must be a hex value like #4ECDC4".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_goal_defaults() {
        let req: CreateGoalRequest = serde_json::from_value(json!({
            "title": "Жим 100 кг",
            "targetValue": 100,
            "unit": "kg"
        }))
        .unwrap();

        assert_eq!(req.color, DEFAULT_GOAL_COLOR);
        assert_eq!(req.category, GoalCategory::Custom);
        assert_eq!(req.current_value, Decimal::ZERO);
        assert!(!req.completed);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_color_validation() {
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("#4ECDC4").is_ok());
        assert!(validate_hex_color("4ECDC4").is_err());
        assert!(validate_hex_color("#4ECDCZ").is_err());
    }

    #[test]
    fn test_goal_values_are_bounded() {
        let req: CreateGoalRequest = serde_json::from_value(json!({
            "title": "Шаги",
            "targetValue": 150000000,
            "unit": "steps"
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("target_value"));

        let update = UpdateGoalRequest {
            current_value: Some(Decimal::new(9_999_999_999, 2)),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = serde_json::from_value::<CreateGoalRequest>(json!({
            "title": "Run",
            "targetValue": 10,
            "unit": "km",
            "category": "cardio"
        }));
        assert!(result.is_err());
    }
}
