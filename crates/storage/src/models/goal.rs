use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(type_name = "goal_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Weight,
    Strength,
    Endurance,
    Body,
    #[default]
    Custom,
}

#[derive(Debug, Clone, FromRow)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
