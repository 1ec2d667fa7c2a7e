//! MET-based energy estimate for a workout session.
//!
//! `calories = avg_met × body_weight_kg × hours`, where `avg_met` is the mean
//! MET of the session's exercises weighted by how many sets each one has.

use crate::catalog::{DEFAULT_MET, MetTable};
use crate::session::Exercise;

/// Set-weighted mean MET of the exercises, or [`DEFAULT_MET`] when there is
/// nothing to average.
pub fn average_met(exercises: &[Exercise], mets: &MetTable) -> f64 {
    let (weighted_sum, total_sets) =
        exercises
            .iter()
            .fold((0.0_f64, 0_usize), |(sum, sets), exercise| {
                let count = exercise.set_count();
                (sum + mets.met_for(&exercise.name) * count as f64, sets + count)
            });

    if total_sets == 0 {
        DEFAULT_MET
    } else {
        weighted_sum / total_sets as f64
    }
}

pub fn estimate_calories(
    exercises: &[Exercise],
    mets: &MetTable,
    body_weight_kg: f64,
    elapsed_seconds: u64,
) -> u32 {
    let body_weight_kg = if body_weight_kg.is_finite() {
        body_weight_kg.max(0.0)
    } else {
        0.0
    };
    let hours = elapsed_seconds as f64 / 3600.0;
    let calories = average_met(exercises, mets) * body_weight_kg * hours;

    calories.round().min(u32::MAX as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SetField, WorkoutSession};
    use chrono::NaiveDate;

    fn session_with(exercises: &[(&str, usize)]) -> WorkoutSession {
        let mut session = WorkoutSession::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        for (name, sets) in exercises {
            let id = session.add_exercise();
            session.rename_exercise(id, *name).unwrap();
            for _ in 1..*sets {
                session.add_set(id).unwrap();
            }
        }
        session
    }

    #[test]
    fn test_no_exercises_uses_default_met() {
        let session = session_with(&[]);
        let mets = MetTable::builtin();
        assert_eq!(estimate_calories(session.exercises(), &mets, 75.0, 3600), 450);
    }

    #[test]
    fn test_single_exercise_half_hour() {
        let session = session_with(&[("Жим лежа", 3)]);
        let mets = MetTable::builtin();
        assert_eq!(estimate_calories(session.exercises(), &mets, 75.0, 1800), 225);
    }

    #[test]
    fn test_zero_elapsed_is_zero() {
        let session = session_with(&[("Приседания", 5), ("Выпады", 2)]);
        let mets = MetTable::builtin();
        assert_eq!(estimate_calories(session.exercises(), &mets, 90.0, 0), 0);
    }

    #[test]
    fn test_average_is_weighted_by_sets() {
        // (8.0 * 3 + 4.5 * 1) / 4 = 7.125
        let session = session_with(&[("Приседания", 3), ("Махи в стороны", 1)]);
        let mets = MetTable::builtin();
        assert!((average_met(session.exercises(), &mets) - 7.125).abs() < 1e-9);
        // 7.125 * 80 * 1.0
        assert_eq!(estimate_calories(session.exercises(), &mets, 80.0, 3600), 570);
    }

    #[test]
    fn test_unknown_exercise_counts_as_default() {
        let session = session_with(&[("Burpees", 2)]);
        assert_eq!(average_met(session.exercises(), &MetTable::builtin()), DEFAULT_MET);

        let custom = MetTable::builtin().with_custom([("Burpees", 10.0)]);
        assert_eq!(average_met(session.exercises(), &custom), 10.0);
    }

    #[test]
    fn test_monotonic_in_elapsed_time() {
        let mut session = session_with(&[("Тяга гантели", 4), ("Молотки", 3)]);
        let id = session.exercises()[0].id();
        let set = session.exercises()[0].sets[0].id();
        session.update_set(id, set, SetField::Weight, 30.0).unwrap();
        let mets = MetTable::builtin();

        let mut previous = 0;
        for elapsed in (0..=7200).step_by(37) {
            let current = estimate_calories(session.exercises(), &mets, 68.4, elapsed);
            assert!(current >= previous, "{} < {} at {}s", current, previous, elapsed);
            previous = current;
        }
    }

    #[test]
    fn test_invalid_body_weight_yields_zero() {
        let session = session_with(&[("Жим лежа", 1)]);
        let mets = MetTable::builtin();
        assert_eq!(estimate_calories(session.exercises(), &mets, f64::NAN, 3600), 0);
        assert_eq!(estimate_calories(session.exercises(), &mets, -70.0, 3600), 0);
    }
}
