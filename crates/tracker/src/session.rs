use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calories;
use crate::catalog::MetTable;
use crate::document::{DropDocument, ExerciseDocument, SetDocument, WorkoutDocument};
use crate::error::SessionError;
use crate::timer::SessionTimer;

pub const DEFAULT_WORKOUT_NAME: &str = "Тренировка";
pub const DEFAULT_REST_TIME_SECONDS: u32 = 90;
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 75.0;
pub const REST_TIME_STEP_SECONDS: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExerciseId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(pub u64);

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    #[default]
    Normal,
    Dropset,
}

impl ExerciseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Normal => "normal",
            ExerciseKind::Dropset => "dropset",
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(ExerciseKind::Normal),
            "dropset" | "drop" => Ok(ExerciseKind::Dropset),
            other => Err(format!("Unknown exercise type: {}", other)),
        }
    }
}

/// Which numeric field of a set or drop an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Weight,
    Reps,
}

impl FromStr for SetField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" | "w" => Ok(SetField::Weight),
            "reps" | "r" => Ok(SetField::Reps),
            other => Err(format!("Unknown set field: {}", other)),
        }
    }
}

/// Parses form input, falling back to 0 for anything that is not a finite number.
pub fn parse_or_zero(input: &str) -> f64 {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn sanitize_weight(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn sanitize_reps(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SetDrop {
    pub weight: f64,
    pub reps: u32,
}

impl SetDrop {
    fn apply(&mut self, field: SetField, value: f64) {
        match field {
            SetField::Weight => self.weight = sanitize_weight(value),
            SetField::Reps => self.reps = sanitize_reps(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    id: SetId,
    pub weight: f64,
    pub reps: u32,
    /// Only shown for dropset exercises, but kept when the kind changes.
    pub drops: Vec<SetDrop>,
}

impl WorkoutSet {
    fn empty(id: SetId) -> Self {
        Self {
            id,
            weight: 0.0,
            reps: 0,
            drops: Vec::new(),
        }
    }

    pub fn id(&self) -> SetId {
        self.id
    }

    fn apply(&mut self, field: SetField, value: f64) {
        match field {
            SetField::Weight => self.weight = sanitize_weight(value),
            SetField::Reps => self.reps = sanitize_reps(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    id: ExerciseId,
    pub name: String,
    pub kind: ExerciseKind,
    pub sets: Vec<WorkoutSet>,
}

impl Exercise {
    pub fn id(&self) -> ExerciseId {
        self.id
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }
}

/// An in-progress workout, owned by whoever drives its timer.
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    name: String,
    date: NaiveDate,
    rest_time_seconds: u32,
    body_weight_kg: f64,
    exercises: Vec<Exercise>,
    timer: SessionTimer,
    next_id: u64,
}

impl WorkoutSession {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            date,
            rest_time_seconds: DEFAULT_REST_TIME_SECONDS,
            body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
            exercises: Vec::new(),
            timer: SessionTimer::new(),
            next_id: 1,
        }
    }

    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn rest_time_seconds(&self) -> u32 {
        self.rest_time_seconds
    }

    pub fn set_rest_time(&mut self, seconds: u32) {
        self.rest_time_seconds = seconds;
    }

    pub fn adjust_rest_time(&mut self, delta_seconds: i32) {
        let adjusted = i64::from(self.rest_time_seconds) + i64::from(delta_seconds);
        self.rest_time_seconds = adjusted.clamp(0, i64::from(u32::MAX)) as u32;
    }

    pub fn body_weight_kg(&self) -> f64 {
        self.body_weight_kg
    }

    pub fn set_body_weight(&mut self, kg: f64) {
        self.body_weight_kg = sanitize_weight(kg);
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    pub fn start(&mut self) {
        self.timer.start();
    }

    pub fn toggle_pause(&mut self) {
        self.timer.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn tick(&mut self) {
        self.timer.tick();
    }

    fn exercise_mut(&mut self, id: ExerciseId) -> Result<&mut Exercise, SessionError> {
        self.exercises
            .iter_mut()
            .find(|ex| ex.id == id)
            .ok_or(SessionError::UnknownExercise(id))
    }

    fn set_mut(
        &mut self,
        exercise_id: ExerciseId,
        set_id: SetId,
    ) -> Result<&mut WorkoutSet, SessionError> {
        self.exercise_mut(exercise_id)?
            .sets
            .iter_mut()
            .find(|set| set.id == set_id)
            .ok_or(SessionError::UnknownSet(set_id))
    }

    /// Appends an unnamed normal exercise holding a single empty set.
    pub fn add_exercise(&mut self) -> ExerciseId {
        let id = ExerciseId(self.next_id());
        let set = WorkoutSet::empty(SetId(self.next_id()));
        self.exercises.push(Exercise {
            id,
            name: String::new(),
            kind: ExerciseKind::Normal,
            sets: vec![set],
        });
        id
    }

    pub fn rename_exercise(
        &mut self,
        id: ExerciseId,
        name: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.exercise_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_exercise_kind(
        &mut self,
        id: ExerciseId,
        kind: ExerciseKind,
    ) -> Result<(), SessionError> {
        self.exercise_mut(id)?.kind = kind;
        Ok(())
    }

    pub fn remove_exercise(&mut self, id: ExerciseId) -> Result<(), SessionError> {
        let before = self.exercises.len();
        self.exercises.retain(|ex| ex.id != id);
        if self.exercises.len() == before {
            return Err(SessionError::UnknownExercise(id));
        }
        Ok(())
    }

    pub fn add_set(&mut self, exercise_id: ExerciseId) -> Result<SetId, SessionError> {
        let set_id = SetId(self.next_id);
        self.exercise_mut(exercise_id)?
            .sets
            .push(WorkoutSet::empty(set_id));
        self.next_id += 1;
        Ok(set_id)
    }

    pub fn update_set(
        &mut self,
        exercise_id: ExerciseId,
        set_id: SetId,
        field: SetField,
        value: f64,
    ) -> Result<(), SessionError> {
        self.set_mut(exercise_id, set_id)?.apply(field, value);
        Ok(())
    }

    pub fn remove_set(&mut self, exercise_id: ExerciseId, set_id: SetId) -> Result<(), SessionError> {
        let exercise = self.exercise_mut(exercise_id)?;
        let position = exercise
            .sets
            .iter()
            .position(|set| set.id == set_id)
            .ok_or(SessionError::UnknownSet(set_id))?;

        if exercise.sets.len() == 1 {
            return Err(SessionError::LastSet(exercise_id));
        }

        exercise.sets.remove(position);
        Ok(())
    }

    /// Appends an empty drop and returns its index within the set.
    pub fn add_drop(&mut self, exercise_id: ExerciseId, set_id: SetId) -> Result<usize, SessionError> {
        let set = self.set_mut(exercise_id, set_id)?;
        set.drops.push(SetDrop::default());
        Ok(set.drops.len() - 1)
    }

    pub fn update_drop(
        &mut self,
        exercise_id: ExerciseId,
        set_id: SetId,
        index: usize,
        field: SetField,
        value: f64,
    ) -> Result<(), SessionError> {
        self.set_mut(exercise_id, set_id)?
            .drops
            .get_mut(index)
            .ok_or(SessionError::UnknownDrop { set: set_id, index })?
            .apply(field, value);
        Ok(())
    }

    pub fn remove_drop(
        &mut self,
        exercise_id: ExerciseId,
        set_id: SetId,
        index: usize,
    ) -> Result<(), SessionError> {
        let set = self.set_mut(exercise_id, set_id)?;
        if index >= set.drops.len() {
            return Err(SessionError::UnknownDrop { set: set_id, index });
        }
        set.drops.remove(index);
        Ok(())
    }

    pub fn estimate_calories(&self, mets: &MetTable) -> u32 {
        calories::estimate_calories(
            &self.exercises,
            mets,
            self.body_weight_kg,
            self.timer.elapsed_seconds(),
        )
    }

    /// Flattens the session into the document handed to the Workouts API.
    pub fn to_document(&self, is_draft: bool, mets: &MetTable) -> WorkoutDocument {
        let name = if self.name.trim().is_empty() {
            DEFAULT_WORKOUT_NAME.to_string()
        } else {
            self.name.clone()
        };

        WorkoutDocument {
            name,
            date: self.date,
            duration: self.timer.elapsed_seconds(),
            rest_time: self.rest_time_seconds,
            exercises: self
                .exercises
                .iter()
                .map(|ex| ExerciseDocument {
                    name: ex.name.clone(),
                    kind: ex.kind,
                    sets: ex
                        .sets
                        .iter()
                        .map(|set| SetDocument {
                            weight: set.weight,
                            reps: set.reps,
                            drops: set
                                .drops
                                .iter()
                                .map(|drop| DropDocument {
                                    weight: drop.weight,
                                    reps: drop.reps,
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
            calories_burned: self.estimate_calories(mets),
            is_draft,
        }
    }

    /// Returns the session to its freshly-mounted state after a draft save.
    pub fn clear_after_save(&mut self) {
        self.timer.stop();
        self.exercises.clear();
        self.name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> WorkoutSession {
        WorkoutSession::new(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap())
    }

    #[test]
    fn test_new_exercise_has_one_empty_set() {
        let mut session = session();
        let id = session.add_exercise();
        let exercise = &session.exercises()[0];

        assert_eq!(exercise.id(), id);
        assert_eq!(exercise.name, "");
        assert_eq!(exercise.kind, ExerciseKind::Normal);
        assert_eq!(exercise.set_count(), 1);
        assert_eq!(exercise.sets[0].weight, 0.0);
        assert_eq!(exercise.sets[0].reps, 0);
    }

    #[test]
    fn test_ids_are_unique_across_exercises_and_sets() {
        let mut session = session();
        let first = session.add_exercise();
        let second = session.add_exercise();
        let set = session.add_set(first).unwrap();

        assert_ne!(first, second);
        let set_ids: Vec<SetId> = session
            .exercises()
            .iter()
            .flat_map(|ex| ex.sets.iter().map(|s| s.id()))
            .collect();
        assert_eq!(set_ids.len(), 3);
        assert!(set_ids.contains(&set));
        assert_eq!(
            set_ids.iter().collect::<std::collections::HashSet<_>>().len(),
            3
        );
    }

    #[test]
    fn test_update_set_sanitizes_values() {
        let mut session = session();
        let ex = session.add_exercise();
        let set = session.exercises()[0].sets[0].id();

        session.update_set(ex, set, SetField::Weight, 82.5).unwrap();
        session.update_set(ex, set, SetField::Reps, 8.9).unwrap();
        assert_eq!(session.exercises()[0].sets[0].weight, 82.5);
        assert_eq!(session.exercises()[0].sets[0].reps, 8);

        session.update_set(ex, set, SetField::Weight, -5.0).unwrap();
        session.update_set(ex, set, SetField::Reps, f64::NAN).unwrap();
        assert_eq!(session.exercises()[0].sets[0].weight, 0.0);
        assert_eq!(session.exercises()[0].sets[0].reps, 0);
    }

    #[test]
    fn test_remove_last_set_is_refused() {
        let mut session = session();
        let ex = session.add_exercise();
        let only = session.exercises()[0].sets[0].id();

        assert_eq!(session.remove_set(ex, only), Err(SessionError::LastSet(ex)));

        let extra = session.add_set(ex).unwrap();
        session.remove_set(ex, only).unwrap();
        assert_eq!(session.exercises()[0].sets.len(), 1);
        assert_eq!(session.exercises()[0].sets[0].id(), extra);
    }

    #[test]
    fn test_unknown_ids_are_reported() {
        let mut session = session();
        let ex = session.add_exercise();

        assert_eq!(
            session.rename_exercise(ExerciseId(99), "x"),
            Err(SessionError::UnknownExercise(ExerciseId(99)))
        );
        assert_eq!(
            session.update_set(ex, SetId(99), SetField::Reps, 1.0),
            Err(SessionError::UnknownSet(SetId(99)))
        );
        assert_eq!(
            session.remove_exercise(ExerciseId(42)),
            Err(SessionError::UnknownExercise(ExerciseId(42)))
        );
    }

    #[test]
    fn test_drops_survive_kind_change() {
        let mut session = session();
        let ex = session.add_exercise();
        let set = session.exercises()[0].sets[0].id();

        session.set_exercise_kind(ex, ExerciseKind::Dropset).unwrap();
        let index = session.add_drop(ex, set).unwrap();
        session
            .update_drop(ex, set, index, SetField::Weight, 40.0)
            .unwrap();
        session.update_drop(ex, set, index, SetField::Reps, 10.0).unwrap();
        session.set_exercise_kind(ex, ExerciseKind::Normal).unwrap();

        let drops = &session.exercises()[0].sets[0].drops;
        assert_eq!(drops, &vec![SetDrop { weight: 40.0, reps: 10 }]);

        assert_eq!(
            session.remove_drop(ex, set, 3),
            Err(SessionError::UnknownDrop { set, index: 3 })
        );
        session.remove_drop(ex, set, 0).unwrap();
        assert!(session.exercises()[0].sets[0].drops.is_empty());
    }

    #[test]
    fn test_rest_time_never_negative() {
        let mut session = session();
        session.adjust_rest_time(REST_TIME_STEP_SECONDS);
        assert_eq!(session.rest_time_seconds(), 105);
        session.adjust_rest_time(-1000);
        assert_eq!(session.rest_time_seconds(), 0);
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero("82.5"), 82.5);
        assert_eq!(parse_or_zero(" 7,5 "), 7.5);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
    }

    #[test]
    fn test_document_uses_default_name() {
        let mut session = session();
        session.start();
        for _ in 0..600 {
            session.tick();
        }
        let ex = session.add_exercise();
        session.rename_exercise(ex, "Жим лежа").unwrap();

        let doc = session.to_document(true, &MetTable::builtin());
        assert_eq!(doc.name, DEFAULT_WORKOUT_NAME);
        assert_eq!(doc.duration, 600);
        assert_eq!(doc.rest_time, 90);
        assert!(doc.is_draft);
        assert_eq!(doc.exercises.len(), 1);
        assert_eq!(doc.exercises[0].sets[0].drops.len(), 0);
        // 6.0 MET * 75 kg * (600 / 3600) h
        assert_eq!(doc.calories_burned, 75);
    }

    #[test]
    fn test_clear_after_save() {
        let mut session = session();
        session.set_name("Ноги");
        session.start();
        session.tick();
        session.add_exercise();
        session.clear_after_save();

        assert_eq!(session.name(), "");
        assert!(session.exercises().is_empty());
        assert!(!session.timer().is_started());
        assert_eq!(session.elapsed_seconds(), 0);
        assert_eq!(session.rest_time_seconds(), DEFAULT_REST_TIME_SECONDS);
    }
}
