use sqlx::PgPool;
use storage::{
    dto::exercise::{CreateCustomExerciseRequest, ExerciseListItem, UpdateCustomExerciseRequest},
    error::Result,
    models::{CustomExercise, MuscleGroup},
    repository::exercise::ExerciseRepository,
};
use tracker::catalog::{self, BUILTIN_EXERCISES};
use uuid::Uuid;

/// The built-in glossary in catalog order.
pub fn builtin_exercises() -> Vec<ExerciseListItem> {
    BUILTIN_EXERCISES
        .iter()
        .map(|entry| ExerciseListItem {
            id: None,
            name: entry.name.to_string(),
            muscle_group: muscle_group(entry.muscle_group),
            met_value: entry.met,
            is_custom: false,
            description: None,
            video_url: None,
        })
        .collect()
}

fn muscle_group(group: catalog::MuscleGroup) -> MuscleGroup {
    match group {
        catalog::MuscleGroup::Chest => MuscleGroup::Chest,
        catalog::MuscleGroup::Back => MuscleGroup::Back,
        catalog::MuscleGroup::Shoulders => MuscleGroup::Shoulders,
        catalog::MuscleGroup::Arms => MuscleGroup::Arms,
        catalog::MuscleGroup::Legs => MuscleGroup::Legs,
        catalog::MuscleGroup::Core => MuscleGroup::Core,
        catalog::MuscleGroup::Cardio => MuscleGroup::Cardio,
        catalog::MuscleGroup::Other => MuscleGroup::Other,
    }
}

/// Built-ins followed by the caller's own exercises. Anonymous callers get
/// the built-ins only.
pub async fn list_exercises(pool: &PgPool, user_id: Option<Uuid>) -> Result<Vec<ExerciseListItem>> {
    let mut exercises = builtin_exercises();

    if let Some(user_id) = user_id {
        let repo = ExerciseRepository::new(pool);
        let custom = repo.list(user_id).await?;
        exercises.extend(custom.into_iter().map(ExerciseListItem::from));
    }

    Ok(exercises)
}

pub async fn list_custom_exercises(pool: &PgPool, user_id: Uuid) -> Result<Vec<CustomExercise>> {
    let repo = ExerciseRepository::new(pool);
    repo.list(user_id).await
}

pub async fn create_custom_exercise(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateCustomExerciseRequest,
) -> Result<CustomExercise> {
    let repo = ExerciseRepository::new(pool);
    repo.create(user_id, request).await
}

pub async fn update_custom_exercise(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    request: &UpdateCustomExerciseRequest,
) -> Result<CustomExercise> {
    let repo = ExerciseRepository::new(pool);
    let existing = repo.find_by_id(user_id, id).await?;
    repo.update(&existing, request).await
}

pub async fn delete_custom_exercise(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = ExerciseRepository::new(pool);
    repo.delete(user_id, id).await
}
