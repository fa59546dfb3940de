//! Sign-in session and the "remember me" cookie.
//!
//! The signed-in username lives in a volatile in-memory session keyed by a
//! browser-session cookie, so it disappears on logout or process exit. The
//! remember-me cookie only prefills the login form and never signs anyone in.

use crate::errors::{AppError, TrackerError};
use crate::models::UserSession;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use cookie::{Cookie, SameSite};
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

pub const SESSION_COOKIE_NAME: &str = "habit_session";
pub const SESSION_USER_KEY: &str = "currentUser";

pub const REMEMBER_COOKIE_NAME: &str = "rememberedUser";
pub const REMEMBER_DAYS: i64 = 30;

/// Session layer over an in-process [`MemoryStore`].
///
/// Records carry no expiry, so the store holds at most one record per
/// browser that signed in: [`sign_in`] cycles the id, which deletes the
/// previous record, and [`sign_out`] flushes the current one. Everything is
/// dropped when the process exits.
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

pub async fn sign_in(session: &Session, user: &UserSession) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, user).await?;
    Ok(())
}

pub async fn sign_out(session: &Session) -> Result<(), AppError> {
    session.flush().await?;
    Ok(())
}

/// Extractor for routes that need a signed-in user.
pub struct CurrentUser(pub UserSession);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(TrackerError::NotSignedIn)?;

        let user: UserSession = session
            .get(SESSION_USER_KEY)
            .await?
            .ok_or(TrackerError::NotSignedIn)?;

        Ok(Self(user))
    }
}

/// `Set-Cookie` value remembering `username` for thirty days.
pub fn remember_cookie(username: &str) -> String {
    Cookie::build((REMEMBER_COOKIE_NAME, username.to_string()))
        .path("/")
        .max_age(cookie::time::Duration::days(REMEMBER_DAYS))
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

pub fn remembered_username(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| Cookie::split_parse_encoded(raw))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == REMEMBER_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|username| !username.is_empty())
}
