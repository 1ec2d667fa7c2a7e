use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::catalog::MetTable;
use crate::command::SessionAction;
use crate::document::PersistedWorkout;
use crate::error::{Result, TrackerError};
use crate::session::WorkoutSession;
use crate::traits::WorkoutStore;

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub enum SessionOutcome {
    Updated(WorkoutSession),
    Saved {
        workout: PersistedWorkout,
        session: WorkoutSession,
    },
    Finished(PersistedWorkout),
    Closed,
}

struct Request {
    action: SessionAction,
    reply: oneshot::Sender<Result<SessionOutcome>>,
}

/// Cloneable front end of a running [`SessionDriver`].
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<Request>,
}

impl SessionHandle {
    pub async fn send(&self, action: SessionAction) -> Result<SessionOutcome> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Request { action, reply })
            .await
            .map_err(|_| TrackerError::DriverStopped)?;
        response.await.map_err(|_| TrackerError::DriverStopped)?
    }
}

/// Owns a session and advances its clock once per second while it runs.
///
/// The one-second interval only exists while the session is started and not
/// paused; pausing, saving or shutting down drops it.
pub struct SessionDriver<S: WorkoutStore> {
    session: WorkoutSession,
    store: S,
    mets: MetTable,
    period: Duration,
}

impl<S: WorkoutStore> SessionDriver<S> {
    pub fn new(session: WorkoutSession, store: S, mets: MetTable) -> Self {
        Self {
            session,
            store,
            mets,
            period: TICK_PERIOD,
        }
    }

    #[cfg(test)]
    fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn spawn(self) -> (SessionHandle, tokio::task::JoinHandle<WorkoutSession>)
    where
        S: 'static,
    {
        let (sender, receiver) = mpsc::channel(32);
        let task = tokio::spawn(self.run(receiver));
        (SessionHandle { sender }, task)
    }

    fn new_ticker(&self) -> Interval {
        let mut ticker = tokio::time::interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    async fn run(mut self, mut requests: mpsc::Receiver<Request>) -> WorkoutSession {
        let mut ticker: Option<Interval> = None;

        loop {
            match (self.session.timer().is_running(), ticker.is_some()) {
                (true, false) => ticker = Some(self.new_ticker()),
                (false, true) => ticker = None,
                _ => {}
            }

            tokio::select! {
                _ = next_tick(&mut ticker) => {
                    self.session.tick();
                }
                request = requests.recv() => {
                    let Some(Request { action, reply }) = request else {
                        break;
                    };
                    let finished = matches!(action, SessionAction::Quit);
                    let outcome = self.apply(action).await;
                    let done = finished || matches!(outcome, Ok(SessionOutcome::Finished(_)));
                    if reply.send(outcome).is_err() {
                        debug!("Session reply dropped by caller");
                    }
                    if done {
                        break;
                    }
                }
            }
        }

        info!(
            "Session driver stopped at {}",
            self.session.timer().formatted()
        );
        self.session
    }

    async fn apply(&mut self, action: SessionAction) -> Result<SessionOutcome> {
        let session = &mut self.session;

        match action {
            SessionAction::Start => session.start(),
            SessionAction::TogglePause => session.toggle_pause(),
            SessionAction::Reset => session.reset(),
            SessionAction::Rename(name) => session.set_name(name),
            SessionAction::SetDate(date) => session.set_date(date),
            SessionAction::SetBodyWeight(kg) => session.set_body_weight(kg),
            SessionAction::AdjustRestTime(delta) => session.adjust_rest_time(delta),
            SessionAction::AddExercise => {
                session.add_exercise();
            }
            SessionAction::RenameExercise(id, name) => session.rename_exercise(id, name)?,
            SessionAction::SetExerciseKind(id, kind) => session.set_exercise_kind(id, kind)?,
            SessionAction::RemoveExercise(id) => session.remove_exercise(id)?,
            SessionAction::AddSet(id) => {
                session.add_set(id)?;
            }
            SessionAction::UpdateSet {
                exercise,
                set,
                field,
                value,
            } => session.update_set(exercise, set, field, value)?,
            SessionAction::RemoveSet(exercise, set) => session.remove_set(exercise, set)?,
            SessionAction::AddDrop(exercise, set) => {
                session.add_drop(exercise, set)?;
            }
            SessionAction::UpdateDrop {
                exercise,
                set,
                index,
                field,
                value,
            } => session.update_drop(exercise, set, index, field, value)?,
            SessionAction::RemoveDrop(exercise, set, index) => {
                session.remove_drop(exercise, set, index)?
            }
            SessionAction::Status => {}
            SessionAction::SaveDraft => return self.save(true).await,
            SessionAction::Finish => return self.save(false).await,
            SessionAction::Quit => return Ok(SessionOutcome::Closed),
        }

        Ok(SessionOutcome::Updated(self.session.clone()))
    }

    /// Hands the flattened session to the store. A failed save leaves the
    /// session exactly as it was.
    async fn save(&mut self, is_draft: bool) -> Result<SessionOutcome> {
        let document = self.session.to_document(is_draft, &self.mets);

        let workout = match self.store.create(&document).await {
            Ok(workout) => workout,
            Err(e) => {
                warn!("Saving workout via {} store failed: {}", self.store.name(), e);
                return Err(e);
            }
        };

        info!(
            "Workout '{}' saved ({}, {} kcal, draft: {})",
            document.name,
            crate::timer::format_elapsed(document.duration),
            document.calories_burned,
            is_draft
        );

        if is_draft {
            self.session.clear_after_save();
            Ok(SessionOutcome::Saved {
                workout,
                session: self.session.clone(),
            })
        } else {
            Ok(SessionOutcome::Finished(workout))
        }
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::WorkoutDocument;
    use crate::error::SessionError;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryStore {
        saved: Arc<Mutex<Vec<WorkoutDocument>>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl WorkoutStore for MemoryStore {
        async fn create(&self, document: &WorkoutDocument) -> Result<PersistedWorkout> {
            if self.fail {
                return Err(TrackerError::ApiError {
                    status: 500,
                    message: "An internal error occurred".to_string(),
                });
            }
            let mut saved = self.saved.lock().unwrap();
            saved.push(document.clone());
            Ok(PersistedWorkout {
                id: format!("w-{}", saved.len()),
                document: document.clone(),
            })
        }

        fn name(&self) -> &'static str {
            "memory"
        }
    }

    fn session() -> WorkoutSession {
        WorkoutSession::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
    }

    fn updated(outcome: SessionOutcome) -> WorkoutSession {
        match outcome {
            SessionOutcome::Updated(session) => session,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_only_while_running() {
        let driver = SessionDriver::new(session(), MemoryStore::default(), MetTable::builtin());
        let (handle, task) = driver.spawn();

        tokio::time::sleep(Duration::from_secs(5)).await;
        let snapshot = updated(handle.send(SessionAction::Status).await.unwrap());
        assert_eq!(snapshot.elapsed_seconds(), 0);

        handle.send(SessionAction::Start).await.unwrap();
        tokio::time::sleep(Duration::from_millis(3500)).await;
        let snapshot = updated(handle.send(SessionAction::TogglePause).await.unwrap());
        assert_eq!(snapshot.elapsed_seconds(), 3);

        tokio::time::sleep(Duration::from_secs(10)).await;
        let snapshot = updated(handle.send(SessionAction::Status).await.unwrap());
        assert_eq!(snapshot.elapsed_seconds(), 3);
        assert!(snapshot.timer().is_paused());

        handle.send(SessionAction::Quit).await.unwrap();
        let final_session = task.await.unwrap();
        assert_eq!(final_session.elapsed_seconds(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_draft_save_clears_session() {
        let store = MemoryStore::default();
        let driver = SessionDriver::new(session(), store.clone(), MetTable::builtin())
            .with_period(Duration::from_secs(1));
        let (handle, _task) = driver.spawn();

        handle.send(SessionAction::Rename("Спина".into())).await.unwrap();
        handle.send(SessionAction::AddExercise).await.unwrap();
        handle.send(SessionAction::Start).await.unwrap();
        tokio::time::sleep(Duration::from_millis(60_500)).await;

        match handle.send(SessionAction::SaveDraft).await.unwrap() {
            SessionOutcome::Saved { workout, session } => {
                assert_eq!(workout.id, "w-1");
                assert_eq!(workout.document.name, "Спина");
                assert_eq!(workout.document.duration, 60);
                assert!(workout.document.is_draft);
                assert!(session.exercises().is_empty());
                assert_eq!(session.elapsed_seconds(), 0);
                assert!(!session.timer().is_started());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(store.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_session() {
        let store = MemoryStore {
            fail: true,
            ..Default::default()
        };
        let driver = SessionDriver::new(session(), store, MetTable::builtin());
        let (handle, _task) = driver.spawn();

        handle.send(SessionAction::AddExercise).await.unwrap();
        let err = handle.send(SessionAction::Finish).await.unwrap_err();
        assert_eq!(err.to_string(), "An internal error occurred");

        let snapshot = updated(handle.send(SessionAction::Status).await.unwrap());
        assert_eq!(snapshot.exercises().len(), 1);
    }

    #[tokio::test]
    async fn test_finish_stops_driver() {
        let store = MemoryStore::default();
        let driver = SessionDriver::new(session(), store.clone(), MetTable::builtin());
        let (handle, task) = driver.spawn();

        let outcome = handle.send(SessionAction::Finish).await.unwrap();
        assert!(matches!(outcome, SessionOutcome::Finished(ref w) if !w.document.is_draft));
        task.await.unwrap();

        assert!(matches!(
            handle.send(SessionAction::Status).await,
            Err(TrackerError::DriverStopped)
        ));
    }

    #[tokio::test]
    async fn test_session_errors_are_reported() {
        let driver = SessionDriver::new(session(), MemoryStore::default(), MetTable::builtin());
        let (handle, _task) = driver.spawn();

        let err = handle
            .send(SessionAction::RemoveExercise(crate::session::ExerciseId(7)))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::SessionError(SessionError::UnknownExercise(_))));
    }
}
