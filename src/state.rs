use crate::errors::{AppError, TrackerError};
use crate::models::AppData;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handle to the in-process snapshot of the users table.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Applies `change` to a copy of the users table and writes the copy to
    /// disk. The live snapshot is replaced only once the write succeeded, and
    /// an unchanged copy is not written at all.
    pub async fn commit<T>(
        &self,
        change: impl FnOnce(&mut AppData) -> Result<T, TrackerError>,
    ) -> Result<T, AppError> {
        let mut data = self.data.lock().await;
        let mut next = data.clone();
        let value = change(&mut next)?;

        if next != *data {
            persist_data(&self.data_path, &next).await?;
            *data = next;
        }
        Ok(value)
    }
}
