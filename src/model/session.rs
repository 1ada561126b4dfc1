use chrono::{DateTime, Utc};

use crate::error::ClockError;

/// Who is clocking in. Both fields are trimmed and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: &str, email: &str) -> Result<Self, ClockError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ClockError::Validation(
                "Please enter your name and email before clocking in".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

/// One open clock-in period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub clock_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Idle,
    Running(Session),
}

impl ClockState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            ClockState::Running(s) => Some(s),
            ClockState::Idle => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ClockState::Running(_))
    }
}
