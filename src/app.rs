use crate::handlers;
use crate::session::session_layer;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/session", get(handlers::get_session))
        .route("/api/remembered", get(handlers::get_remembered))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::add_habit),
        )
        .route("/api/habits/{id}", delete(handlers::remove_habit))
        .route("/api/habits/{id}/complete", post(handlers::complete_habit))
        .route("/api/habits/{id}/history", get(handlers::get_history))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/analytics", get(handlers::get_analytics))
        .layer(session_layer())
        .with_state(state)
}
