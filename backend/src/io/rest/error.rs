use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::domain::models::{AttendanceError, DutyError, LeaveError, PersonError, TaskError};

/// Errors returned by the REST handlers, each with a fixed status code
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        let message = err.to_string();

        if let Some(e) = err.downcast_ref::<PersonError>() {
            return match e {
                PersonError::NotFound(_) => ApiError::NotFound(message),
                PersonError::EmptyName | PersonError::NameTooLong { .. } => {
                    ApiError::BadRequest(message)
                }
            };
        }
        if let Some(e) = err.downcast_ref::<AttendanceError>() {
            return match e {
                AttendanceError::EmptyMarkedBy => ApiError::BadRequest(message),
                AttendanceError::UnknownPerson(_) => ApiError::NotFound(message),
                AttendanceError::MarkingWindowClosed { .. } => ApiError::Forbidden(message),
            };
        }
        if let Some(e) = err.downcast_ref::<DutyError>() {
            return match e {
                DutyError::NoEligibleOfficer(_)
                | DutyError::SelectionChanged { .. }
                | DutyError::AlreadyAssigned { .. } => ApiError::Conflict(message),
            };
        }
        if let Some(e) = err.downcast_ref::<LeaveError>() {
            return match e {
                LeaveError::UnknownPerson(_) | LeaveError::NotFound(_) => ApiError::NotFound(message),
                LeaveError::AlreadyDecided { .. } => ApiError::Conflict(message),
                LeaveError::EmptyLeaveType
                | LeaveError::EmptyReason
                | LeaveError::EndBeforeStart { .. }
                | LeaveError::TooManyDays { .. }
                | LeaveError::InsufficientNotice { .. } => ApiError::BadRequest(message),
            };
        }
        if let Some(e) = err.downcast_ref::<TaskError>() {
            return match e {
                TaskError::NotFound(_) => ApiError::NotFound(message),
                TaskError::EmptyTitle | TaskError::EmptyCategory => ApiError::BadRequest(message),
            };
        }

        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(e) => {
                error!("Internal error: {:#}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn status_of(err: impl Into<anyhow::Error>) -> StatusCode {
        ApiError::from(err.into()).status()
    }

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        assert_eq!(status_of(PersonError::EmptyName), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(PersonError::NotFound(1)), StatusCode::NOT_FOUND);
        assert_eq!(status_of(AttendanceError::UnknownPerson(1)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AttendanceError::MarkingWindowClosed {
                start: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            }),
            StatusCode::FORBIDDEN
        );
        assert_eq!(status_of(DutyError::NoEligibleOfficer(day)), StatusCode::CONFLICT);
        assert_eq!(
            status_of(DutyError::AlreadyAssigned { date: day, person_id: 1 }),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(LeaveError::EmptyReason), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(LeaveError::AlreadyDecided {
                id: 1,
                status: shared::LeaveStatus::Approved,
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(TaskError::NotFound(3)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(anyhow::anyhow!("disk on fire")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message_kept_for_domain_errors() {
        let err = ApiError::from(anyhow::Error::from(TaskError::EmptyTitle));
        assert_eq!(err.to_string(), "Title cannot be empty");
    }
}
