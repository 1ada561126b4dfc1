//! Clock-in/clock-out time tracking.
//!
//! [`manager::ClockSessionManager`] owns the Idle/Running state machine. It
//! talks to the attendance sheet through [`submitter::AttendanceSubmitter`]
//! and keeps the open session across restarts through
//! [`session_store::SessionStore`]. State only advances after the sheet
//! confirms the event.

pub mod clock;
pub mod manager;
pub mod session_store;
pub mod submitter;
