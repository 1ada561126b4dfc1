use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Why the attendance sheet did not record an event.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SubmitError {
    #[display(fmt = "attendance sheet rejected the submission with status {}", status)]
    RemoteRejected { status: u16 },
    #[display(fmt = "attendance sheet unreachable: {}", _0)]
    Network(String),
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Display)]
pub enum ClockError {
    #[display(fmt = "{}", _0)]
    Validation(String),
    #[display(fmt = "{}", _0)]
    InvalidState(String),
    #[display(fmt = "submission failed: {}", _0)]
    SubmissionFailed(SubmitError),
    #[display(fmt = "session storage failed: {}", _0)]
    StorageFailed(StoreError),
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClockError::SubmissionFailed(e) => Some(e),
            ClockError::StorageFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SubmitError> for ClockError {
    fn from(e: SubmitError) -> Self {
        ClockError::SubmissionFailed(e)
    }
}

impl ResponseError for ClockError {
    fn status_code(&self) -> StatusCode {
        match self {
            ClockError::Validation(_) => StatusCode::BAD_REQUEST,
            ClockError::InvalidState(_) => StatusCode::CONFLICT,
            ClockError::SubmissionFailed(_) => StatusCode::BAD_GATEWAY,
            ClockError::StorageFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // transport details stay in the log
            ClockError::SubmissionFailed(_) => {
                "Could not record attendance, please try again".to_string()
            }
            ClockError::StorageFailed(_) => {
                "Could not update the saved session, please try again".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

/// Failure to persist or remove the active session.
#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "session file I/O failed: {}", _0)]
    Io(std::io::Error),
    #[display(fmt = "session encoding failed: {}", _0)]
    Encode(serde_json::Error),
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Encode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            ClockError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ClockError::InvalidState("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ClockError::from(SubmitError::RemoteRejected { status: 500 }).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ClockError::StorageFailed(StoreError::Io(std::io::Error::other("disk full")))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn rejection_and_transport_failures_surface_the_same_way() {
        let rejected = ClockError::from(SubmitError::RemoteRejected { status: 403 });
        let network = ClockError::from(SubmitError::Network("timed out".into()));
        assert_eq!(rejected.status_code(), network.status_code());
        assert!(rejected.to_string().starts_with("submission failed"));
        assert!(network.to_string().starts_with("submission failed"));
    }
}
