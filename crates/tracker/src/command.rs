use std::str::FromStr;

use chrono::NaiveDate;

use crate::session::{ExerciseId, ExerciseKind, SetField, SetId, parse_or_zero};

/// One edit or lifecycle step applied to a running session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Start,
    TogglePause,
    Reset,
    Rename(String),
    SetDate(NaiveDate),
    SetBodyWeight(f64),
    AdjustRestTime(i32),
    AddExercise,
    RenameExercise(ExerciseId, String),
    SetExerciseKind(ExerciseId, ExerciseKind),
    RemoveExercise(ExerciseId),
    AddSet(ExerciseId),
    UpdateSet {
        exercise: ExerciseId,
        set: SetId,
        field: SetField,
        value: f64,
    },
    RemoveSet(ExerciseId, SetId),
    AddDrop(ExerciseId, SetId),
    UpdateDrop {
        exercise: ExerciseId,
        set: SetId,
        index: usize,
        field: SetField,
        value: f64,
    },
    RemoveDrop(ExerciseId, SetId, usize),
    Status,
    SaveDraft,
    Finish,
    Quit,
}

pub const HELP: &str = "\
commands:
  start | pause | reset | status | save | finish | quit
  name <text>                      workout name
  date <YYYY-MM-DD>                workout date
  bodyweight <kg>                  weight used for the calorie estimate
  rest +15 | rest -15              adjust rest time in seconds
  add                              add an exercise
  rename <ex> <text>               rename an exercise
  kind <ex> normal|dropset         change exercise type
  remove <ex>                      remove an exercise
  set add <ex>                     add a set
  set <ex> <set> weight|reps <n>   edit a set
  set rm <ex> <set>                remove a set
  drop add <ex> <set>              add a drop to a set
  drop <ex> <set> <i> weight|reps <n>
  drop rm <ex> <set> <i>";

fn exercise_id(token: Option<&str>) -> Result<ExerciseId, String> {
    let token = token.ok_or("missing exercise id")?;
    token
        .parse::<u64>()
        .map(ExerciseId)
        .map_err(|_| format!("invalid exercise id: {}", token))
}

fn set_id(token: Option<&str>) -> Result<SetId, String> {
    let token = token.ok_or("missing set id")?;
    token
        .parse::<u64>()
        .map(SetId)
        .map_err(|_| format!("invalid set id: {}", token))
}

fn drop_index(token: Option<&str>) -> Result<usize, String> {
    let token = token.ok_or("missing drop index")?;
    token
        .parse::<usize>()
        .map_err(|_| format!("invalid drop index: {}", token))
}

fn set_field(token: Option<&str>) -> Result<SetField, String> {
    token.ok_or("missing field (weight|reps)")?.parse()
}

fn rest_of(line: &str, skip: usize) -> String {
    line.split_whitespace()
        .skip(skip)
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for SessionAction {
    type Err = String;

    /// Parses one line of CLI input. Numeric values follow the form
    /// convention: anything unparsable becomes 0. Ids must be valid.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Err("empty command".to_string());
        };

        let action = match head.to_lowercase().as_str() {
            "start" => SessionAction::Start,
            "pause" | "resume" => SessionAction::TogglePause,
            "reset" => SessionAction::Reset,
            "status" | "st" => SessionAction::Status,
            "save" | "draft" => SessionAction::SaveDraft,
            "finish" => SessionAction::Finish,
            "quit" | "exit" => SessionAction::Quit,
            "name" => SessionAction::Rename(rest_of(line, 1)),
            "date" => {
                let raw = tokens.next().ok_or("missing date")?;
                let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|e| format!("invalid date {}: {}", raw, e))?;
                SessionAction::SetDate(date)
            }
            "bodyweight" | "bw" => {
                SessionAction::SetBodyWeight(parse_or_zero(tokens.next().unwrap_or("")))
            }
            "rest" => {
                let delta = parse_or_zero(tokens.next().unwrap_or("")) as i32;
                SessionAction::AdjustRestTime(delta)
            }
            "add" => SessionAction::AddExercise,
            "rename" => {
                let id = exercise_id(tokens.next())?;
                SessionAction::RenameExercise(id, rest_of(line, 2))
            }
            "kind" | "type" => {
                let id = exercise_id(tokens.next())?;
                let kind = tokens.next().ok_or("missing type")?.parse()?;
                SessionAction::SetExerciseKind(id, kind)
            }
            "remove" | "rm" => SessionAction::RemoveExercise(exercise_id(tokens.next())?),
            "set" => match tokens.next() {
                Some("add") => SessionAction::AddSet(exercise_id(tokens.next())?),
                Some("rm") => {
                    let exercise = exercise_id(tokens.next())?;
                    SessionAction::RemoveSet(exercise, set_id(tokens.next())?)
                }
                first => {
                    let exercise = exercise_id(first)?;
                    let set = set_id(tokens.next())?;
                    let field = set_field(tokens.next())?;
                    let value = parse_or_zero(tokens.next().unwrap_or(""));
                    SessionAction::UpdateSet {
                        exercise,
                        set,
                        field,
                        value,
                    }
                }
            },
            "drop" => match tokens.next() {
                Some("add") => {
                    let exercise = exercise_id(tokens.next())?;
                    SessionAction::AddDrop(exercise, set_id(tokens.next())?)
                }
                Some("rm") => {
                    let exercise = exercise_id(tokens.next())?;
                    let set = set_id(tokens.next())?;
                    SessionAction::RemoveDrop(exercise, set, drop_index(tokens.next())?)
                }
                first => {
                    let exercise = exercise_id(first)?;
                    let set = set_id(tokens.next())?;
                    let index = drop_index(tokens.next())?;
                    let field = set_field(tokens.next())?;
                    let value = parse_or_zero(tokens.next().unwrap_or(""));
                    SessionAction::UpdateDrop {
                        exercise,
                        set,
                        index,
                        field,
                        value,
                    }
                }
            },
            other => return Err(format!("unknown command: {}", other)),
        };

        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!("start".parse(), Ok(SessionAction::Start));
        assert_eq!(" PAUSE ".parse(), Ok(SessionAction::TogglePause));
        assert_eq!("save".parse(), Ok(SessionAction::SaveDraft));
        assert!("".parse::<SessionAction>().is_err());
        assert!("jump".parse::<SessionAction>().is_err());
    }

    #[test]
    fn test_names_keep_spaces() {
        assert_eq!(
            "name Грудь и трицепс".parse(),
            Ok(SessionAction::Rename("Грудь и трицепс".to_string()))
        );
        assert_eq!(
            "rename 3 Жим лежа".parse(),
            Ok(SessionAction::RenameExercise(ExerciseId(3), "Жим лежа".to_string()))
        );
    }

    #[test]
    fn test_set_commands() {
        assert_eq!(
            "set 1 2 weight 82.5".parse(),
            Ok(SessionAction::UpdateSet {
                exercise: ExerciseId(1),
                set: SetId(2),
                field: SetField::Weight,
                value: 82.5,
            })
        );
        assert_eq!("set add 4".parse(), Ok(SessionAction::AddSet(ExerciseId(4))));
        assert_eq!(
            "set rm 4 7".parse(),
            Ok(SessionAction::RemoveSet(ExerciseId(4), SetId(7)))
        );
    }

    #[test]
    fn test_unparsable_value_defaults_to_zero() {
        assert_eq!(
            "set 1 2 reps lots".parse(),
            Ok(SessionAction::UpdateSet {
                exercise: ExerciseId(1),
                set: SetId(2),
                field: SetField::Reps,
                value: 0.0,
            })
        );
        assert_eq!("bodyweight ?".parse(), Ok(SessionAction::SetBodyWeight(0.0)));
    }

    #[test]
    fn test_invalid_ids_are_rejected() {
        assert!("set x 2 reps 5".parse::<SessionAction>().is_err());
        assert!("drop add 1".parse::<SessionAction>().is_err());
        assert!("kind 1 superset".parse::<SessionAction>().is_err());
    }

    #[test]
    fn test_drop_commands() {
        assert_eq!(
            "drop 1 2 0 reps 6".parse(),
            Ok(SessionAction::UpdateDrop {
                exercise: ExerciseId(1),
                set: SetId(2),
                index: 0,
                field: SetField::Reps,
                value: 6.0,
            })
        );
        assert_eq!(
            "drop rm 1 2 0".parse(),
            Ok(SessionAction::RemoveDrop(ExerciseId(1), SetId(2), 0))
        );
    }

    #[test]
    fn test_rest_and_date() {
        assert_eq!("rest -15".parse(), Ok(SessionAction::AdjustRestTime(-15)));
        assert_eq!(
            "date 2026-01-05".parse(),
            Ok(SessionAction::SetDate(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()))
        );
        assert!("date 05/01/2026".parse::<SessionAction>().is_err());
    }
}
