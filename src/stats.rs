use crate::dates::{date_key, days_ago_label, format_long, last_n_days, today};
use crate::models::{
    AnalyticsSummary, CalendarDay, DailyStats, Habit, HabitCard, HabitHistoryResponse,
    HistoryEntry, WeeklyProgress,
};
use chrono::{Datelike, NaiveDate};

pub const CALENDAR_DAYS: u32 = 28;
pub const WEEK_DAYS: u32 = 7;

pub fn build_daily_stats(habits: &[Habit]) -> DailyStats {
    daily_stats(habits, today())
}

pub fn daily_stats(habits: &[Habit], date: NaiveDate) -> DailyStats {
    let total_habits = habits.len();
    let completed = habits
        .iter()
        .filter(|habit| habit.history.contains(&date))
        .count();
    let percentage = if total_habits == 0 {
        0
    } else {
        rounded_ratio(completed * 100, total_habits)
    };

    DailyStats {
        date: date_key(date),
        total_habits,
        completed,
        percentage,
        active_streaks: habits.iter().filter(|habit| habit.streak > 0).count(),
        best_streak: habits.iter().map(|habit| habit.best_streak).max().unwrap_or(0),
    }
}

/// Completions per day over the last `days` days, oldest first.
pub fn heatmap(habits: &[Habit], today: NaiveDate, days: u32) -> Vec<CalendarDay> {
    let mut calendar: Vec<CalendarDay> = last_n_days(today, days)
        .map(|date| CalendarDay {
            date: date_key(date),
            day: date.day(),
            completed: habits
                .iter()
                .filter(|habit| habit.history.contains(&date))
                .count(),
        })
        .collect();
    calendar.reverse();
    calendar
}

pub fn weekly_completion_rate(habit: &Habit, today: NaiveDate, days: u32) -> WeeklyProgress {
    let completed_days = last_n_days(today, days)
        .filter(|date| habit.history.contains(date))
        .count() as u32;
    let rate = if days == 0 {
        0.0
    } else {
        f64::from(completed_days) / f64::from(days)
    };

    WeeklyProgress {
        completed_days,
        window_days: days,
        rate,
    }
}

pub fn analytics_summary(habits: &[Habit]) -> AnalyticsSummary {
    let total_completions = habits.iter().map(|habit| habit.history.len()).sum();
    let streak_sum: usize = habits.iter().map(|habit| habit.streak as usize).sum();
    let average_streak = if habits.is_empty() {
        0
    } else {
        rounded_ratio(streak_sum, habits.len())
    };

    AnalyticsSummary {
        total_habits: habits.len(),
        total_completions,
        average_streak,
    }
}

pub fn habit_card(habit: &Habit, today: NaiveDate) -> HabitCard {
    HabitCard {
        id: habit.id.clone(),
        name: habit.name.clone(),
        started: format_long(habit.created_at),
        streak: habit.streak,
        best_streak: habit.best_streak,
        completed_today: habit.history.contains(&today),
        week: weekly_completion_rate(habit, today, WEEK_DAYS),
    }
}

pub fn habit_history(habit: &Habit, today: NaiveDate) -> HabitHistoryResponse {
    let entries = habit
        .history
        .iter()
        .rev()
        .map(|&date| HistoryEntry {
            date: date_key(date),
            label: format_long(date),
            days_ago: days_ago_label(date, today),
        })
        .collect();

    HabitHistoryResponse {
        id: habit.id.clone(),
        name: habit.name.clone(),
        streak: habit.streak,
        best_streak: habit.best_streak,
        entries,
    }
}

// Half rounds up, matching how the page has always shown percentages.
fn rounded_ratio(numerator: usize, denominator: usize) -> u32 {
    ((numerator as f64) / (denominator as f64)).round() as u32
}
