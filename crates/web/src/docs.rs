use utoipa::OpenApi;

use crate::features::{calculators, exercises, goals, health, measurements, workouts};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FitTrack API",
        description = "Workout logging, goals and body tracking"
    ),
    paths(
        health::handlers::health,
        workouts::handlers::list_workouts,
        workouts::handlers::recent_workouts,
        workouts::handlers::workout_stats,
        workouts::handlers::workout_calendar,
        workouts::handlers::get_workout,
        workouts::handlers::create_workout,
        workouts::handlers::update_workout,
        workouts::handlers::delete_workout,
        goals::handlers::list_goals,
        goals::handlers::get_goal,
        goals::handlers::create_goal,
        goals::handlers::update_goal,
        goals::handlers::delete_goal,
        measurements::handlers::list_weight_entries,
        measurements::handlers::get_weight_entry,
        measurements::handlers::create_weight_entry,
        measurements::handlers::update_weight_entry,
        measurements::handlers::delete_weight_entry,
        measurements::handlers::list_body_measurements,
        measurements::handlers::get_body_measurement,
        measurements::handlers::create_body_measurement,
        measurements::handlers::update_body_measurement,
        measurements::handlers::update_body_field,
        measurements::handlers::delete_body_measurement,
        measurements::handlers::body_changes,
        measurements::handlers::list_progress_photos,
        measurements::handlers::create_progress_photo,
        measurements::handlers::delete_progress_photo,
        exercises::handlers::list_exercises,
        exercises::handlers::list_custom_exercises,
        exercises::handlers::create_custom_exercise,
        exercises::handlers::update_custom_exercise,
        exercises::handlers::delete_custom_exercise,
        calculators::handlers::one_rep_max,
        calculators::handlers::bmr,
        calculators::handlers::plates,
        calculators::handlers::ideal_weight,
    ),
    components(
        schemas(
            storage::dto::common::PaginationMeta,
            storage::dto::workout::WorkoutResponse,
            storage::dto::workout::WorkoutSummary,
            storage::dto::workout::WorkoutStats,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutRequest,
            storage::dto::goal::GoalResponse,
            storage::dto::goal::CreateGoalRequest,
            storage::dto::goal::UpdateGoalRequest,
            storage::dto::measurement::WeightEntryResponse,
            storage::dto::measurement::CreateWeightEntryRequest,
            storage::dto::measurement::UpdateWeightEntryRequest,
            storage::dto::measurement::BodyMeasurementResponse,
            storage::dto::measurement::BodyMeasurementRequest,
            storage::dto::measurement::MeasurementFieldUpdate,
            storage::dto::measurement::MeasurementChangesResponse,
            storage::dto::measurement::FieldChange,
            storage::dto::measurement::ProgressPhotoResponse,
            storage::dto::measurement::CreateProgressPhotoRequest,
            storage::dto::exercise::CustomExerciseResponse,
            storage::dto::exercise::ExerciseListItem,
            storage::dto::exercise::CreateCustomExerciseRequest,
            storage::dto::exercise::UpdateCustomExerciseRequest,
            storage::models::WorkoutExercise,
            storage::models::WorkoutSet,
            storage::models::SetDrop,
            storage::models::ExerciseType,
            storage::models::GoalCategory,
            storage::models::MuscleGroup,
            storage::models::BodyMeasurementField,
            calculators::dto::OneRepMaxRequest,
            calculators::dto::OneRepMaxResponse,
            calculators::dto::PercentageOfMaxResponse,
            calculators::dto::BmrRequest,
            calculators::dto::BmrResponse,
            calculators::dto::PlatesRequest,
            calculators::dto::PlatesResponse,
            calculators::dto::PlateCountResponse,
            calculators::dto::IdealWeightRequest,
            calculators::dto::IdealWeightResponse,
            health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "workouts", description = "Logged workouts and their statistics"),
        (name = "goals", description = "Personal goals with progress"),
        (name = "measurements", description = "Weight log, body measurements and progress photos"),
        (name = "exercises", description = "Exercise glossary and custom exercises"),
        (name = "calculators", description = "Public fitness calculators"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}
