use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the account and habit operations. The message is what the
/// user sees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("A task with this name already exists")]
    DuplicateHabitName,

    #[error("User not found")]
    UserNotFound,

    #[error("Incorrect password")]
    WrongPassword,

    #[error("Task not found")]
    HabitNotFound,

    #[error("Please sign in first")]
    NotSignedIn,
}

impl TrackerError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateUsername | Self::DuplicateHabitName => StatusCode::CONFLICT,
            Self::UserNotFound | Self::HabitNotFound => StatusCode::NOT_FOUND,
            Self::WrongPassword | Self::NotSignedIn => StatusCode::UNAUTHORIZED,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
