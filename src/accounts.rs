//! Account store over the in-memory users table.
//!
//! Credentials are kept as entered. Every mutation here only touches the
//! snapshot; callers persist the whole table afterwards.

use crate::errors::TrackerError;
use crate::models::{AppData, Habit, UserRecord, UserSession};
use chrono::{DateTime, Utc};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_password(password: &str) -> Result<(), TrackerError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(TrackerError::invalid(
            "Password must be at least 6 characters long",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(TrackerError::invalid(
            "Password must contain at least one uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(TrackerError::invalid(
            "Password must contain at least one number",
        ));
    }
    Ok(())
}

impl AppData {
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
        now: DateTime<Utc>,
    ) -> Result<(), TrackerError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(TrackerError::invalid("Please fill in all fields"));
        }
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(TrackerError::invalid(
                "Username must be at least 3 characters long",
            ));
        }
        validate_password(password)?;
        if password != confirm_password {
            return Err(TrackerError::invalid("Passwords do not match"));
        }
        if self.users.contains_key(username) {
            return Err(TrackerError::DuplicateUsername);
        }

        self.users.insert(
            username.to_string(),
            UserRecord {
                password: password.to_string(),
                habits: Vec::new(),
                created_at: now,
            },
        );
        Ok(())
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<UserSession, TrackerError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(TrackerError::invalid("Please fill in all fields"));
        }
        let record = self
            .users
            .get(username)
            .ok_or(TrackerError::UserNotFound)?;
        if record.password != password {
            return Err(TrackerError::WrongPassword);
        }
        Ok(UserSession {
            username: username.to_string(),
        })
    }

    /// A user whose record has vanished from the store reads as having no habits.
    pub fn load_habits(&self, session: &UserSession) -> Vec<Habit> {
        self.users
            .get(&session.username)
            .map(|record| record.habits.clone())
            .unwrap_or_default()
    }

    pub fn save_habits(
        &mut self,
        session: &UserSession,
        habits: Vec<Habit>,
    ) -> Result<(), TrackerError> {
        let record = self
            .users
            .get_mut(&session.username)
            .ok_or(TrackerError::UserNotFound)?;
        record.habits = habits;
        Ok(())
    }
}
