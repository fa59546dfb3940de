pub mod accounts;
pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod session;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use errors::{AppError, TrackerError};
pub use state::AppState;
pub use storage::{load_data, persist_data};
