//! Habit creation, completion and deletion.

use crate::dates::yesterday_of;
use crate::errors::TrackerError;
use crate::models::Habit;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeSet;
use tracing::debug;

/// Builds an id shaped like `habit_<unix-millis>_<9 alphanumerics>`.
pub fn generate_habit_id() -> String {
    let suffix: String = uuid::Uuid::new_v4().simple().to_string().chars().take(9).collect();
    format!("habit_{}_{suffix}", Utc::now().timestamp_millis())
}

pub fn find_habit<'a>(habits: &'a [Habit], id: &str) -> Result<&'a Habit, TrackerError> {
    habits
        .iter()
        .find(|habit| habit.id == id)
        .ok_or(TrackerError::HabitNotFound)
}

pub fn find_habit_mut<'a>(habits: &'a mut [Habit], id: &str) -> Result<&'a mut Habit, TrackerError> {
    habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or(TrackerError::HabitNotFound)
}

/// Appends a new habit. Names are compared case-insensitively but stored as typed.
pub fn create_habit(
    habits: &mut Vec<Habit>,
    name: &str,
    today: NaiveDate,
) -> Result<Habit, TrackerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TrackerError::invalid("Please enter a task name"));
    }
    let lowered = name.to_lowercase();
    if habits.iter().any(|habit| habit.name.to_lowercase() == lowered) {
        return Err(TrackerError::DuplicateHabitName);
    }

    let habit = Habit {
        id: generate_habit_id(),
        name: name.to_string(),
        created_at: today,
        streak: 0,
        best_streak: 0,
        history: BTreeSet::new(),
    };
    habits.push(habit.clone());
    Ok(habit)
}

/// Records a completion on `date` and updates the streak counters.
///
/// Returns `false` when `date` was already recorded. The run is extended only
/// when the day before `today` is in the history; `date` itself is not
/// compared against `today`, so backdated entries can leave `streak` out of
/// step with the history.
pub fn record_completion(habit: &mut Habit, date: NaiveDate, today: NaiveDate) -> bool {
    if !habit.history.insert(date) {
        return false;
    }

    if habit.history.len() == 1 {
        habit.streak = 1;
    } else if habit.history.contains(&yesterday_of(today)) {
        habit.streak += 1;
    } else {
        habit.streak = 1;
    }
    habit.best_streak = habit.best_streak.max(habit.streak);

    debug!(
        habit = %habit.id,
        %date,
        streak = habit.streak,
        best = habit.best_streak,
        "completion recorded"
    );
    true
}

/// Removes the habit with `id`; an unknown id leaves the list alone.
pub fn delete_habit(habits: &mut Vec<Habit>, id: &str) -> bool {
    let before = habits.len();
    habits.retain(|habit| habit.id != id);
    habits.len() != before
}
