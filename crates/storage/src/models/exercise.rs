use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(type_name = "muscle_group", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    Cardio,
    #[default]
    Other,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
            MuscleGroup::Cardio => "cardio",
            MuscleGroup::Other => "other",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chest" => Ok(MuscleGroup::Chest),
            "back" => Ok(MuscleGroup::Back),
            "shoulders" => Ok(MuscleGroup::Shoulders),
            "arms" => Ok(MuscleGroup::Arms),
            "legs" => Ok(MuscleGroup::Legs),
            "core" => Ok(MuscleGroup::Core),
            "cardio" => Ok(MuscleGroup::Cardio),
            "other" => Ok(MuscleGroup::Other),
            other => Err(format!("Unknown muscle group: {}", other)),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CustomExercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub description: String,
    pub video_url: String,
    pub is_custom: bool,
    pub met_value: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muscle_group_round_trips_through_str() {
        for group in [MuscleGroup::Chest, MuscleGroup::Cardio, MuscleGroup::Other] {
            assert_eq!(group.as_str().parse::<MuscleGroup>(), Ok(group));
        }
        assert!("glutes".parse::<MuscleGroup>().is_err());
    }
}
