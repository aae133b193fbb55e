//! File upload pane.
//!
//! Takes a path, checks it locally, and hands it to the app shell as
//! [`Action::UploadFile`]. Only one upload may be in flight at a time.

use crate::api::UploadResponse;
use crate::config::UploadConfig;
use crate::constants::ERROR_UPLOAD_IN_PROGRESS;
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{Action, Component, NotificationKind};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use std::path::{Path, PathBuf};

pub struct FileUploadComponent {
    input: TextInput,
    uploading: bool,
    focused: bool,
    recent_uploads: Vec<UploadResponse>,
    config: UploadConfig,
    pub icons: IconService,
}

impl FileUploadComponent {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            input: TextInput::new(),
            uploading: false,
            focused: false,
            recent_uploads: Vec::new(),
            config,
            icons: IconService::default(),
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn set_uploading(&mut self, uploading: bool) {
        self.uploading = uploading;
    }

    pub fn input(&self) -> &str {
        self.input.value()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input.set_value(value);
    }

    pub fn recent_uploads(&self) -> &[UploadResponse] {
        &self.recent_uploads
    }

    fn submit(&mut self) -> Action {
        if self.uploading {
            return Action::Notify {
                kind: NotificationKind::Error,
                message: ERROR_UPLOAD_IN_PROGRESS.to_string(),
            };
        }

        match validate_upload_path(self.input.value(), &self.config) {
            Ok(path) => Action::UploadFile(path),
            Err(message) => Action::Notify {
                kind: NotificationKind::Error,
                message,
            },
        }
    }
}

impl Component for FileUploadComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(),
            _ => {
                self.input.handle_key(key);
                Action::None
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::UploadCompleted(response) => {
                self.uploading = false;
                self.input.clear();
                self.recent_uploads.insert(0, response.clone());
                self.recent_uploads.truncate(10);
            }
            Action::UploadFailed(_) => {
                self.uploading = false;
            }
            Action::DocumentsCleared(_) => {
                self.recent_uploads.clear();
            }
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} Upload Study Material ", self.icons.upload()))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(border_color));

        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Path input
            Constraint::Length(2), // Hint or progress
            Constraint::Min(0),    // Recent uploads
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

        f.render_widget(create_input_paragraph(self.input.value(), "File path"), chunks[0]);
        if self.focused {
            let cursor_x = chunks[0].x + 1 + self.input.cursor_position() as u16;
            f.set_cursor_position((cursor_x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1));
        }

        let hint = if self.uploading {
            Line::from(Span::styled(
                format!("{} Uploading and indexing...", self.icons.thinking()),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            let allowed: Vec<String> = self
                .config
                .allowed_extensions
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect();
            Line::from(Span::styled(
                format!(
                    "Accepted: {} up to {} MB",
                    allowed.join(", "),
                    self.config.max_file_size_bytes / (1024 * 1024)
                ),
                Style::default().fg(Color::Gray),
            ))
        };
        f.render_widget(Paragraph::new(hint).wrap(Wrap { trim: true }), chunks[1]);

        let uploads: Vec<Line> = self
            .recent_uploads
            .iter()
            .map(|upload| {
                Line::from(vec![
                    Span::styled(format!("{} ", self.icons.success()), Style::default().fg(Color::Green)),
                    Span::styled(upload.filename.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!(" ({} chunks)", upload.chunks_added),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            })
            .collect();
        f.render_widget(Paragraph::new(uploads), chunks[2]);

        f.render_widget(
            create_instructions_paragraph(&[shortcuts::ENTER_UPLOAD, shortcuts::SEPARATOR, shortcuts::TAB_SWITCH]),
            chunks[3],
        );
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

/// Check a user-entered path before anything is sent to the backend.
pub fn validate_upload_path(input: &str, config: &UploadConfig) -> Result<PathBuf, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter the path of a file to upload".to_string());
    }

    let path = expand_home(trimmed);

    let metadata = std::fs::metadata(&path).map_err(|_| format!("File not found: {}", path.display()))?;
    if !metadata.is_file() {
        return Err(format!("Not a file: {}", path.display()));
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if !config
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
    {
        let shown = if extension.is_empty() {
            "(none)".to_string()
        } else {
            format!(".{}", extension)
        };
        return Err(format!(
            "Unsupported file type: {}. Only {} files are supported.",
            shown,
            config
                .allowed_extensions
                .iter()
                .map(|ext| ext.to_ascii_uppercase())
                .collect::<Vec<_>>()
                .join(" and ")
        ));
    }

    if metadata.len() > config.max_file_size_bytes {
        return Err(format!(
            "File is too large: {} bytes (limit {} bytes)",
            metadata.len(),
            config.max_file_size_bytes
        ));
    }

    Ok(path)
}

fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    Path::new(input).to_path_buf()
}
