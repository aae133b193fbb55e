//! Modal dialog component.
//!
//! Hosts the clear-all confirmation, the help screen and the log viewer.
//! While a dialog is visible it receives every key before the panes do.

use crate::icons::IconService;
use crate::ui::components::dialogs::{scroll_behavior, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};
use std::path::{Path, PathBuf};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    logs: Vec<String>,
    log_file: Option<PathBuf>,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            logs: Vec::new(),
            log_file: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Snapshot of log lines shown by the logs dialog
    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    /// File the logs are also written to, shown in the logs dialog title
    pub fn set_log_file(&mut self, path: Option<&Path>) {
        self.log_file = path.map(Path::to_path_buf);
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        scroll_behavior::scroll_to_top(&mut self.scroll_offset, &mut self.scrollbar_state);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.clear_dialog();
                Action::ClearDocuments
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => {
                scroll_behavior::scroll_up(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                scroll_behavior::scroll_down(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            KeyCode::PageUp => {
                scroll_behavior::page_up(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            KeyCode::PageDown => {
                scroll_behavior::page_down(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            KeyCode::Home => {
                scroll_behavior::scroll_to_top(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            KeyCode::End => {
                // Clamped to the last full page at render time
                self.scroll_offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type {
            Some(DialogType::ClearConfirmation) => self.handle_confirmation_key(key),
            Some(DialogType::Help) | Some(DialogType::Logs) => self.handle_scroll_key(key),
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::ShowDialog(dialog_type) => self.show(dialog_type.clone()),
            Action::HideDialog => self.clear_dialog(),
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::ClearConfirmation) => {
                system_dialogs::render_clear_confirmation_dialog(f, rect, &self.icons);
            }
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(
                    f,
                    rect,
                    &self.icons,
                    &mut self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            Some(DialogType::Logs) => {
                system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    &self.logs,
                    self.log_file.as_deref(),
                    &mut self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            None => {}
        }
    }
}
