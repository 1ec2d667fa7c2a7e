use crate::Result;
use crate::document::{PersistedWorkout, WorkoutDocument};

/// Persistence collaborator that receives finished or drafted sessions.
#[async_trait::async_trait]
pub trait WorkoutStore: Send + Sync {
    async fn create(&self, document: &WorkoutDocument) -> Result<PersistedWorkout>;

    fn name(&self) -> &'static str;
}
