use chrono::{Duration, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn yesterday() -> NaiveDate {
    yesterday_of(today())
}

pub fn yesterday_of(today: NaiveDate) -> NaiveDate {
    today - Duration::days(1)
}

/// Canonical `YYYY-MM-DD` key used in storage and the API.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The `n` most recent days including `today`, most recent first.
///
/// The iterator is cheap to clone, so callers can walk the same window twice.
pub fn last_n_days(today: NaiveDate, n: u32) -> impl Iterator<Item = NaiveDate> + Clone {
    (0..n).map(move |offset| today - Duration::days(i64::from(offset)))
}

/// [`last_n_days`] ending at the local current date.
pub fn last_n_days_from_now(n: u32) -> impl Iterator<Item = NaiveDate> + Clone {
    last_n_days(today(), n)
}

/// Long form, e.g. "October 16, 2026".
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn days_ago_label(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days().abs() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days => format!("{days} days ago"),
    }
}
