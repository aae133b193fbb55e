//! Reusable UI components

pub mod chat_panel;
pub mod dialog_component;
pub mod dialogs;
pub mod file_upload;
pub mod notification_banner;
pub mod status_bar;
pub mod text_input;

// Component exports
pub use chat_panel::{ChatEntry, ChatPanelComponent};
pub use dialog_component::DialogComponent;
pub use file_upload::{validate_upload_path, FileUploadComponent};
pub use notification_banner::NotificationBanner;
pub use status_bar::StatusBarComponent;
pub use text_input::TextInput;
