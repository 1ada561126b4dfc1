use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use futures::lock::Mutex;
use tracing::{error, info, instrument};

use super::clock::Clock;
use super::session_store::SessionStore;
use super::submitter::{AttendanceEvent, AttendanceSubmitter};
use crate::error::ClockError;
use crate::model::session::{ClockState, Identity, Session};
use crate::utils::time_format::{Elapsed, elapsed};

/// Result of a confirmed clock-out.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockOutSummary {
    pub session: Session,
    pub clock_out_at: DateTime<Utc>,
    pub total_hours: f64,
}

/// Idle/Running state machine for a single device.
///
/// `clock_in`, `clock_out` and `cancel` run one at a time behind an async
/// guard held across the submission, so a double click can never submit
/// twice. `state` and `current_elapsed` only read the snapshot and never
/// wait on an in-flight submission.
pub struct ClockSessionManager {
    state: RwLock<ClockState>,
    transition: Mutex<()>,
    store: Arc<dyn SessionStore>,
    submitter: Arc<dyn AttendanceSubmitter>,
    clock: Arc<dyn Clock>,
}

impl ClockSessionManager {
    /// Adopts whatever session the store still holds from a previous run.
    pub fn new(
        store: Arc<dyn SessionStore>,
        submitter: Arc<dyn AttendanceSubmitter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let state = match store.load() {
            Some(session) => {
                info!(
                    employee = %session.identity.name,
                    clock_in_at = %session.clock_in_at,
                    "Resuming persisted session"
                );
                ClockState::Running(session)
            }
            None => ClockState::Idle,
        };

        Self {
            state: RwLock::new(state),
            transition: Mutex::new(()),
            store,
            submitter,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn state(&self) -> ClockState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // millisecond precision is all the store and the sheet keep
    fn capture_now(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(3)
    }

    fn set_state(&self, next: ClockState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    fn running_session(&self) -> Result<Session, ClockError> {
        self.state()
            .session()
            .cloned()
            .ok_or_else(|| ClockError::InvalidState("Not clocked in".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn clock_in(&self, name: &str, email: &str) -> Result<Session, ClockError> {
        let identity = Identity::new(name, email)?;
        let _guard = self.transition.lock().await;

        if self.state().is_running() {
            return Err(ClockError::InvalidState("Already clocked in".to_string()));
        }

        let now = self.capture_now();
        let event = AttendanceEvent {
            identity: identity.clone(),
            clock_in: now,
            clock_out: None,
            date: calendar_date(now),
            total_hours: None,
        };
        self.submitter.submit(&event).await?;

        let session = Session {
            identity,
            clock_in_at: now,
        };
        if let Err(e) = self.store.save(&session) {
            // recorded remotely; only restart recovery is lost
            error!(error = %e, "Failed to persist active session");
        }
        self.set_state(ClockState::Running(session.clone()));

        info!(clock_in_at = %now, "Clocked in");
        Ok(session)
    }

    #[instrument(skip(self))]
    pub async fn clock_out(&self) -> Result<ClockOutSummary, ClockError> {
        let _guard = self.transition.lock().await;
        let session = self.running_session()?;

        let now = self.capture_now();
        let total_hours = elapsed(session.clock_in_at, now).total_hours();
        let event = AttendanceEvent {
            identity: session.identity.clone(),
            clock_in: session.clock_in_at,
            clock_out: Some(now),
            date: calendar_date(now),
            total_hours: Some(total_hours),
        };
        self.submitter.submit(&event).await?;

        if let Err(e) = self.store.clear() {
            error!(error = %e, "Failed to clear persisted session");
        }
        self.set_state(ClockState::Idle);

        info!(employee = %session.identity.name, total_hours, "Clocked out");
        Ok(ClockOutSummary {
            session,
            clock_out_at: now,
            total_hours,
        })
    }

    /// Drops the open session without telling the sheet.
    #[instrument(skip(self))]
    pub async fn cancel(&self) -> Result<Session, ClockError> {
        let _guard = self.transition.lock().await;
        let session = self.running_session()?;

        self.store.clear().map_err(|e| {
            error!(error = %e, "Failed to clear persisted session on cancel");
            ClockError::StorageFailed(e)
        })?;
        self.set_state(ClockState::Idle);

        info!(employee = %session.identity.name, "Session cancelled");
        Ok(session)
    }

    /// Time worked so far in the open session. Pure read; callers poll it
    /// for live displays.
    pub fn current_elapsed(&self, now: DateTime<Utc>) -> Result<Elapsed, ClockError> {
        let session = self.running_session()?;
        Ok(elapsed(session.clock_in_at, now))
    }
}

fn calendar_date(t: DateTime<Utc>) -> NaiveDate {
    t.date_naive()
}
