//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Backend connection
/// Environment variable that selects the backend base URL
pub const API_URL_ENV: &str = "STUDY_ASSISTANT_API_URL";
/// Base URL used when neither the environment nor the config file sets one
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Default HTTP timeout in seconds (0 disables the timeout)
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 0;

// Upload limits
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 2] = ["pdf", "pptx"];

// UI timing
pub const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

// Success Messages
pub const SUCCESS_UPLOAD: &str = "Uploaded";
pub const SUCCESS_DOCUMENTS_CLEARED: &str = "All documents cleared";

// Error Messages
pub const ERROR_UPLOAD_FAILED: &str = "Upload failed";
pub const ERROR_UPLOAD_IN_PROGRESS: &str = "An upload is already in progress";
pub const ERROR_CHAT_FAILED: &str = "Failed to get an answer";
pub const ERROR_CLEAR_FAILED: &str = "Failed to clear documents";
pub const ERROR_BACKEND_UNREACHABLE: &str = "Backend unreachable";
pub const ERROR_NOTHING_TO_CLEAR: &str = "There are no documents to clear";

// Status bar text
pub const STATUS_CONNECTING: &str = "Connecting...";
pub const STATUS_CONNECTED: &str = "Connected";
pub const STATUS_CHUNKS_SUFFIX: &str = "document chunks indexed";
pub const STATUS_CLEAR_HINT: &str = "Ctrl+D: Clear All Documents";

// Dialog text
pub const CLEAR_CONFIRMATION_MESSAGE: &str =
    "Are you sure you want to clear all documents? This action cannot be undone.";

// UI Messages
pub const APP_TITLE: &str = "Study Assistant";
pub const APP_SUBTITLE: &str = "Upload your study materials and ask questions powered by AI";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'Ctrl+L' to close";
