use crate::api::{
    ApiError, ChatMessage, ChatResponse, ClearResponse, HealthResponse, ServiceInfo, StatusResponse, UploadResponse,
};
use std::path::PathBuf;

/// Which input pane receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    Upload,
    #[default]
    Chat,
}

impl FocusPane {
    pub fn next(self) -> Self {
        match self {
            FocusPane::Upload => FocusPane::Chat,
            FocusPane::Chat => FocusPane::Upload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    FocusNext,

    // Upload
    UploadFile(PathBuf),
    UploadCompleted(UploadResponse),
    UploadFailed(String),

    // Chat
    SendChat {
        query: String,
        history: Option<Vec<ChatMessage>>,
    },
    ChatAnswered(ChatResponse),
    ChatFailed(String),

    // Status bar
    RefreshStatus,
    StatusLoaded {
        token: u64,
        result: Result<StatusResponse, ApiError>,
    },
    RequestClear,
    ClearDocuments,
    DocumentsCleared(ClearResponse),
    ClearFailed(String),

    // Startup checks
    HealthChecked(HealthResponse),
    HealthFailed(String),
    ServiceInfoLoaded(ServiceInfo),

    // Notifications
    Notify {
        kind: NotificationKind,
        message: String,
    },

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    ClearConfirmation,
    Help,
    Logs,
}
