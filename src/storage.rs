use crate::errors::AppError;
use crate::models::AppData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

/// Reads the users table. A missing or unreadable file is an empty table.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            AppData::default()
        }
    }
}

/// Sibling file the table is staged in before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Rewrites the whole users table, not just the record that changed.
///
/// The table is written to a sibling file and renamed over `path`, so a
/// crash mid-write leaves the previous table intact.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let staging = staging_path(path);
    fs::write(&staging, payload).await.map_err(AppError::internal)?;
    if let Err(err) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(AppError::internal(err));
    }
    debug!(users = data.users.len(), "users table persisted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::{create_habit, record_completion};
    use chrono::{NaiveDate, Utc};

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "habit_tracker_{tag}_{}_{nanos}.json",
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn missing_file_is_empty_state() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.users.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_is_empty_state() {
        let path = temp_path("malformed");
        fs::write(&path, b"{ not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.users.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persist_then_load_keeps_users_and_habits() {
        let path = temp_path("roundtrip");
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        let mut data = AppData::default();
        data.register("alice", "Secret1", "Secret1", Utc::now()).unwrap();
        let session = data.authenticate("alice", "Secret1").unwrap();
        let mut habits = data.load_habits(&session);
        let habit = create_habit(&mut habits, "Stretch", today).unwrap();
        record_completion(&mut habits[0], today, today);
        data.save_habits(&session, habits).unwrap();

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        let reloaded = loaded.load_habits(&session);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].id, habit.id);
        assert_eq!(reloaded[0].streak, 1);
        assert!(reloaded[0].history.contains(&today));
        assert!(loaded.authenticate("alice", "Secret1").is_ok());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn reads_camel_case_layout_with_missing_counters() {
        let path = temp_path("layout");
        let raw = r#"{
            "users": {
                "carol": {
                    "password": "Secret1",
                    "createdAt": "2026-01-01T08:00:00.000Z",
                    "habits": [
                        { "id": "habit_1_abc", "name": "Walk", "createdAt": "2026-01-02",
                          "history": ["2026-01-03", "2026-01-02"] }
                    ]
                }
            }
        }"#;
        fs::write(&path, raw).await.unwrap();

        let data = load_data(&path).await;
        let record = data.users.get("carol").expect("user loaded");
        let habit = &record.habits[0];
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.best_streak, 0);
        assert_eq!(habit.history.len(), 2);

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persist_replaces_file_without_leaving_staging_copy() {
        let path = temp_path("atomic");
        let staging = staging_path(&path);
        fs::write(&staging, b"{ half written").await.unwrap();
        fs::write(&path, b"{\"users\":{}}").await.unwrap();

        let mut data = AppData::default();
        data.register("dave", "Secret1", "Secret1", Utc::now()).unwrap();
        persist_data(&path, &data).await.unwrap();

        assert!(!staging.exists());
        assert_eq!(load_data(&path).await, data);

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn stale_staging_file_is_ignored_on_load() {
        let path = temp_path("stale");
        let mut data = AppData::default();
        data.register("erin", "Secret1", "Secret1", Utc::now()).unwrap();
        persist_data(&path, &data).await.unwrap();
        fs::write(staging_path(&path), b"garbage").await.unwrap();

        assert_eq!(load_data(&path).await, data);

        let _ = fs::remove_file(&path).await;
        let _ = fs::remove_file(staging_path(&path)).await;
    }
}
