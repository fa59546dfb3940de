use crate::dates::today;
use crate::errors::AppError;
use crate::habits::{create_habit, delete_habit, find_habit, find_habit_mut, record_completion};
use crate::models::{
    AnalyticsSummary, CalendarResponse, CompletionResponse, CreateHabitRequest, DailyStats,
    HabitCard, HabitHistoryResponse, LoginRequest, MessageResponse, RegisterRequest,
    RememberedResponse, SessionResponse,
};
use crate::session::{CurrentUser, remember_cookie, remembered_username, sign_in, sign_out};
use crate::state::AppState;
use crate::stats::{
    CALENDAR_DAYS, analytics_summary, build_daily_stats, habit_card, habit_history, heatmap,
};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{AppendHeaders, Html, IntoResponse},
};
use chrono::Utc;
use tower_sessions::Session;
use tracing::{info, warn};

pub async fn index(headers: HeaderMap) -> Result<Html<String>, AppError> {
    let page = render_index(remembered_username(&headers).as_deref()).map_err(AppError::internal)?;
    Ok(Html(page))
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state
        .commit(|data| {
            data.register(
                &payload.username,
                &payload.password,
                &payload.confirm_password,
                Utc::now(),
            )
        })
        .await?;

    info!(username = payload.username.trim(), "account created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Account created successfully! Please sign in.".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = {
        let data = state.data.lock().await;
        data.authenticate(&payload.username, &payload.password)
            .inspect_err(|err| {
                warn!(username = payload.username.trim(), "sign-in rejected: {err}")
            })?
    };
    sign_in(&session, &user).await?;

    info!(username = %user.username, "signed in");
    Ok((
        AppendHeaders([(header::SET_COOKIE, remember_cookie(&user.username))]),
        Json(MessageResponse {
            message: format!("Welcome back, {}!", user.username),
        }),
    ))
}

/// Ends the session. The remember-me cookie is left in place.
pub async fn logout(session: Session) -> Result<Json<MessageResponse>, AppError> {
    sign_out(&session).await?;
    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}

pub async fn get_session(CurrentUser(user): CurrentUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        username: user.username,
    })
}

pub async fn get_remembered(headers: HeaderMap) -> Json<RememberedResponse> {
    Json(RememberedResponse {
        username: remembered_username(&headers),
    })
}

pub async fn list_habits(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<Vec<HabitCard>> {
    let date = today();
    let data = state.data.lock().await;
    let cards = data
        .load_habits(&user)
        .iter()
        .map(|habit| habit_card(habit, date))
        .collect();
    Json(cards)
}

pub async fn add_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<HabitCard>), AppError> {
    let date = today();
    let habit = state
        .commit(|data| {
            let mut habits = data.load_habits(&user);
            let habit = create_habit(&mut habits, &payload.name, date)?;
            data.save_habits(&user, habits)?;
            Ok(habit)
        })
        .await?;

    info!(username = %user.username, habit = %habit.id, "habit created");
    Ok((StatusCode::CREATED, Json(habit_card(&habit, date))))
}

pub async fn complete_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<CompletionResponse>, AppError> {
    let date = today();
    let (recorded, card) = state
        .commit(|data| {
            let mut habits = data.load_habits(&user);
            let habit = find_habit_mut(&mut habits, &id)?;
            let recorded = record_completion(habit, date, date);
            let card = habit_card(habit, date);
            if recorded {
                data.save_habits(&user, habits)?;
            }
            Ok((recorded, card))
        })
        .await?;

    if recorded {
        info!(username = %user.username, habit = %id, streak = card.streak, "habit completed");
    }

    Ok(Json(CompletionResponse {
        recorded,
        habit: card,
    }))
}

pub async fn remove_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .commit(|data| {
            let mut habits = data.load_habits(&user);
            let removed = delete_habit(&mut habits, &id);
            if removed {
                data.save_habits(&user, habits)?;
            }
            Ok(removed)
        })
        .await?;

    if removed {
        info!(username = %user.username, habit = %id, "habit deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_history(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<HabitHistoryResponse>, AppError> {
    let data = state.data.lock().await;
    let habits = data.load_habits(&user);
    let habit = find_habit(&habits, &id)?;
    Ok(Json(habit_history(habit, today())))
}

pub async fn get_stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<DailyStats> {
    let data = state.data.lock().await;
    Json(build_daily_stats(&data.load_habits(&user)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<CalendarResponse> {
    let data = state.data.lock().await;
    Json(CalendarResponse {
        days: heatmap(&data.load_habits(&user), today(), CALENDAR_DAYS),
    })
}

pub async fn get_analytics(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<AnalyticsSummary> {
    let data = state.data.lock().await;
    Json(analytics_summary(&data.load_habits(&user)))
}
