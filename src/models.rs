use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub best_streak: u32,
    /// Completion dates, serialized as `YYYY-MM-DD` strings.
    #[serde(default)]
    pub history: BTreeSet<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub password: String,
    #[serde(default)]
    pub habits: Vec<Habit>,
    pub created_at: DateTime<Utc>,
}

/// Everything persisted to the data file, keyed by exact username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub users: BTreeMap<String, UserRecord>,
}

/// The signed-in user, threaded explicitly into every account operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub username: String,
}

/// API bodies are snake_case; only the persisted layout is camelCase.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RememberedResponse {
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub completed_days: u32,
    pub window_days: u32,
    /// Fraction of the window completed, `0.0..=1.0`.
    pub rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitCard {
    pub id: String,
    pub name: String,
    pub started: String,
    pub streak: u32,
    pub best_streak: u32,
    pub completed_today: bool,
    pub week: WeeklyProgress,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub recorded: bool,
    pub habit: HabitCard,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub label: String,
    pub days_ago: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitHistoryResponse {
    pub id: String,
    pub name: String,
    pub streak: u32,
    pub best_streak: u32,
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: String,
    pub total_habits: usize,
    pub completed: usize,
    pub percentage: u32,
    pub active_streaks: usize,
    pub best_streak: u32,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    pub day: u32,
    pub completed: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_habits: usize,
    pub total_completions: usize,
    pub average_streak: u32,
}
