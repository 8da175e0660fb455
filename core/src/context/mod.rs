//! Native runtime context: the CLI's persisted settings and the file watcher
//! that tells a process when another one rewrote the progress file.

mod app_config;
mod error;
pub mod watcher;

pub use app_config::{APP_NAME, AppConfig};
pub use error::{AppConfigError, WatcherError};
pub use watcher::{ProgressEvent, ProgressWatcher};
