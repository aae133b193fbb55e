use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Path of the file the global `log` dispatcher writes to, once installed.
static FILE_LOG_PATH: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Entries are kept in memory for the logs dialog and forwarded to the `log`
/// facade. When file logging is enabled a `fern` dispatcher persists them.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    /// In-memory logger without a file sink
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Build a logger from the `[logging]` config section
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_log_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Logger that also writes to `path` through the global `log` dispatcher
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        init_file_logging(path.as_ref())?;
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: true,
        })
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        log::info!(target: "study_assistant", "{}", message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(format!("[{}] {}", timestamp, message));
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Path of the active log file, if file logging was installed
    pub fn log_file(&self) -> Option<&'static Path> {
        FILE_LOG_PATH.get().map(PathBuf::as_path)
    }

    /// Default log file location in the user data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("study-assistant").join("study-assistant.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global `fern` dispatcher. Only the first call takes effect.
fn init_file_logging(path: &Path) -> Result<()> {
    FILE_LOG_PATH
        .get_or_try_init(|| -> Result<PathBuf> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }

            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(log::LevelFilter::Info)
                .chain(
                    fern::log_file(path)
                        .with_context(|| format!("Failed to open log file: {}", path.display()))?,
                )
                .apply()
                .context("A global logger is already installed")?;

            Ok(path.to_path_buf())
        })
        .map(|_| ())
}
