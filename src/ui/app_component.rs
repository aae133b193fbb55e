use crate::api::StudyApi;
use crate::config::Config;
use crate::constants::{
    APP_SUBTITLE, APP_TITLE, ERROR_BACKEND_UNREACHABLE, ERROR_CHAT_FAILED, ERROR_CLEAR_FAILED, ERROR_NOTHING_TO_CLEAR,
    ERROR_UPLOAD_FAILED, SUCCESS_DOCUMENTS_CLEARED, SUCCESS_UPLOAD,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{
    ChatPanelComponent, DialogComponent, FileUploadComponent, NotificationBanner, StatusBarComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, FocusPane, NotificationKind},
    event_handler::EventType,
    task_manager::TaskManager,
    AppState, Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    upload: FileUploadComponent,
    chat: ChatPanelComponent,
    status_bar: StatusBarComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    icons: IconService,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    api_url: String,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn StudyApi>, config: &Config, logger: Logger) -> Self {
        let api_url = api.base_url().to_string();
        let (task_manager, background_action_rx) = TaskManager::new(api);
        let icons = IconService::new(config.ui.icon_theme);

        let mut app = Self {
            upload: FileUploadComponent::new(config.upload.clone()),
            chat: ChatPanelComponent::new(),
            status_bar: StatusBarComponent::new(),
            dialog: DialogComponent::new(),
            state: AppState::new(config.ui.notification_timeout()),
            icons,
            task_manager,
            background_action_rx,
            logger,
            api_url,
            should_quit: false,
        };
        app.apply_icon_theme();
        app.apply_focus();
        app
    }

    /// Kick off the startup health check and the first status fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.logger.log(format!("App: Connecting to backend at {}", self.api_url));
        self.task_manager.spawn_health_check();
        self.sync_refresh();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn status_bar(&self) -> &StatusBarComponent {
        &self.status_bar
    }

    pub fn upload_pane(&self) -> &FileUploadComponent {
        &self.upload
    }

    pub fn upload_pane_mut(&mut self) -> &mut FileUploadComponent {
        &mut self.upload
    }

    pub fn chat_panel(&self) -> &ChatPanelComponent {
        &self.chat
    }

    pub fn chat_panel_mut(&mut self) -> &mut ChatPanelComponent {
        &mut self.chat
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Let the status bar see the current refresh signal and fetch if it moved
    fn sync_refresh(&mut self) {
        let signal = self.state.refresh_signal();
        if let Some(token) = self.status_bar.observe_refresh(signal) {
            self.logger
                .log(format!("Status: Fetching for refresh signal {} (token {})", signal.value(), token));
            self.task_manager.spawn_status_fetch(token);
        }
    }

    fn refresh_status(&mut self) {
        self.state.advance_refresh();
        self.sync_refresh();
    }

    fn notify(&mut self, kind: NotificationKind, message: String) {
        self.logger.log(format!("Notification ({:?}): {}", kind, message));
        self.state.show_notification(kind, message, Instant::now());
    }

    fn apply_icon_theme(&mut self) {
        let theme = self.icons.theme();
        self.upload.icons.set_theme(theme);
        self.chat.icons.set_theme(theme);
        self.status_bar.icons.set_theme(theme);
        self.dialog.icons.set_theme(theme);
    }

    fn apply_focus(&mut self) {
        match self.state.focus {
            FocusPane::Upload => {
                self.chat.on_blur();
                self.upload.on_focus();
            }
            FocusPane::Chat => {
                self.upload.on_blur();
                self.chat.on_focus();
            }
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('r') if ctrl => {
                self.logger.log("Global key: Ctrl+R - refreshing status".to_string());
                Action::RefreshStatus
            }
            KeyCode::Char('d') if ctrl => {
                self.logger.log("Global key: Ctrl+D - clear all documents requested".to_string());
                Action::RequestClear
            }
            KeyCode::Char('l') if ctrl => Action::ShowDialog(DialogType::Logs),
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::F(2) => Action::CycleIconTheme,
            KeyCode::Tab | KeyCode::BackTab => Action::FocusNext,
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            // Ctrl+C still quits from inside a dialog
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Action::Quit;
            }
            if key.code == KeyCode::Char('l')
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && self.dialog.dialog_type == Some(DialogType::Logs)
            {
                return Action::HideDialog;
            }
            return self.dialog.handle_key_events(key);
        }

        let global_action = self.handle_global_key(key);
        if !matches!(global_action, Action::None) {
            return global_action;
        }

        match self.state.focus {
            FocusPane::Upload => self.upload.handle_key_events(key),
            FocusPane::Chat => self.chat.handle_key_events(key),
        }
    }

    /// Run an action through the components, then the app-level handler,
    /// until nothing follows from it.
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while !matches!(next, Action::None) {
            let updated = self.update(next);
            next = self.handle_app_action(updated);
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::FocusNext => {
                self.state.focus = self.state.focus.next();
                self.apply_focus();
                Action::None
            }
            Action::UploadFile(path) => {
                self.logger.log(format!("Upload: Starting upload of {}", path.display()));
                self.upload.set_uploading(true);
                self.task_manager.spawn_upload(path);
                Action::None
            }
            Action::UploadCompleted(response) => {
                self.logger.log(format!(
                    "Upload: {} indexed with {} chunks",
                    response.filename, response.chunks_added
                ));
                self.notify(
                    NotificationKind::Success,
                    format!(
                        "{} {}: {} ({} chunks added)",
                        SUCCESS_UPLOAD, response.filename, response.message, response.chunks_added
                    ),
                );
                self.refresh_status();
                Action::None
            }
            Action::UploadFailed(error) => {
                self.notify(NotificationKind::Error, format!("{}: {}", ERROR_UPLOAD_FAILED, error));
                Action::None
            }
            Action::SendChat { query, history } => {
                self.logger.log(format!(
                    "Chat: Sending question with {} prior messages",
                    history.as_ref().map_or(0, Vec::len)
                ));
                self.task_manager.spawn_chat(query, history);
                Action::None
            }
            Action::ChatAnswered(response) => {
                self.logger
                    .log(format!("Chat: Answer received citing {} sources", response.sources.len()));
                Action::None
            }
            Action::ChatFailed(error) => {
                self.notify(NotificationKind::Error, format!("{}: {}", ERROR_CHAT_FAILED, error));
                Action::None
            }
            Action::RefreshStatus => {
                self.refresh_status();
                Action::None
            }
            Action::StatusLoaded { token, result } => {
                if !self.status_bar.apply_status(token, &result) {
                    self.logger.log(format!("Status: Discarded stale response (token {})", token));
                } else {
                    match result {
                        Ok(status) => self
                            .logger
                            .log(format!("Status: {} document chunks indexed", status.document_count)),
                        Err(e) => self.logger.log(format!("Status: Fetch failed: {}", e)),
                    }
                }
                Action::None
            }
            Action::RequestClear => {
                if self.status_bar.can_clear() {
                    Action::ShowDialog(DialogType::ClearConfirmation)
                } else {
                    self.notify(NotificationKind::Error, ERROR_NOTHING_TO_CLEAR.to_string());
                    Action::None
                }
            }
            Action::ClearDocuments => {
                self.logger.log("Clear: Confirmed, deleting all documents".to_string());
                self.task_manager.spawn_clear();
                Action::None
            }
            Action::DocumentsCleared(response) => {
                let message = if response.message.is_empty() {
                    SUCCESS_DOCUMENTS_CLEARED.to_string()
                } else {
                    response.message
                };
                self.notify(NotificationKind::Success, message);
                self.refresh_status();
                Action::None
            }
            Action::ClearFailed(error) => {
                self.notify(NotificationKind::Error, format!("{}: {}", ERROR_CLEAR_FAILED, error));
                Action::None
            }
            Action::HealthChecked(health) => {
                self.logger.log(format!(
                    "Health: Backend {} with {} documents indexed",
                    health.status, health.documents_indexed
                ));
                Action::None
            }
            Action::HealthFailed(error) => {
                self.notify(NotificationKind::Error, format!("{}: {}", ERROR_BACKEND_UNREACHABLE, error));
                Action::None
            }
            Action::ServiceInfoLoaded(info) => {
                self.logger.log(format!("Health: {} v{}", info.message, info.version));
                self.state.backend_version = Some(info.version);
                Action::None
            }
            Action::Notify { kind, message } => {
                self.notify(kind, message);
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.apply_icon_theme();
                self.logger.log(format!("UI: Icon theme set to {:?}", self.icons.theme()));
                Action::None
            }
            Action::ShowDialog(dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                if dialog_type == DialogType::Logs {
                    self.dialog.set_logs(self.logger.get_logs());
                    self.dialog.set_log_file(self.logger.log_file());
                }
                Action::None
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                Action::None
            }
            Action::None => Action::None,
        }
    }

    /// Drain results sent back by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for task in completed_tasks {
            self.logger.log(format!(
                "Background: {:?} task #{} ({}) finished after {:?}",
                task.kind,
                task.id,
                task.description,
                task.started_at.elapsed()
            ));
        }

        actions
    }

    /// Wait for the next background result and apply it.
    ///
    /// Returns false when every task sender is gone.
    pub async fn next_background_action(&mut self) -> bool {
        match self.background_action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Periodic housekeeping. Returns true when something visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for action in self.process_background_actions() {
            self.dispatch(action);
            changed = true;
        }
        if self.state.expire_notifications(now) {
            changed = true;
        }
        changed
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Other => Action::None,
            EventType::Tick => {
                self.tick(Instant::now());
                Action::None
            }
        };

        self.dispatch(action);
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let mut title = vec![Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if let Some(version) = &self.state.backend_version {
            title.push(Span::styled(format!(" v{}", version), Style::default().fg(Color::DarkGray)));
        }
        title.push(Span::styled(
            format!("  {}", self.api_url),
            Style::default().fg(Color::DarkGray),
        ));

        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray))),
        ];
        f.render_widget(Paragraph::new(lines), rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.status_bar.update(action);
        let action = self.upload.update(action);
        self.chat.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect, self.state.notification().is_some());

        self.render_header(f, areas.header);
        if let Some(notification) = self.state.notification() {
            NotificationBanner::render(f, areas.notification, notification, &self.icons);
        }

        let (upload_area, chat_area) = LayoutManager::body_layout(areas.body);
        self.upload.render(f, upload_area);
        self.chat.render(f, chat_area);
        self.status_bar.render(f, areas.status);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
