//! Status bar component
//!
//! Shows whether the backend answered the last status request and how many
//! document chunks it has indexed. A fetch is requested exactly once for each
//! distinct refresh signal value, starting with the initial one.

use crate::api::{ApiError, StatusResponse};
use crate::constants::{STATUS_CHUNKS_SUFFIX, STATUS_CLEAR_HINT, STATUS_CONNECTED, STATUS_CONNECTING};
use crate::icons::IconService;
use crate::ui::core::{Action, Component, RefreshSignal};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct StatusBarComponent {
    document_count: u64,
    loading: bool,
    last_signal: Option<RefreshSignal>,
    request_token: u64,
    pub icons: IconService,
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self {
            document_count: 0,
            loading: true,
            last_signal: None,
            request_token: 0,
            icons: IconService::default(),
        }
    }

    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Token of the most recent fetch request
    pub fn current_token(&self) -> u64 {
        self.request_token
    }

    /// Clearing is only offered when something is indexed
    pub fn can_clear(&self) -> bool {
        self.document_count > 0
    }

    /// Returns a fetch token when `signal` differs from the last one observed.
    pub fn observe_refresh(&mut self, signal: RefreshSignal) -> Option<u64> {
        if self.last_signal == Some(signal) {
            return None;
        }

        self.last_signal = Some(signal);
        self.request_token += 1;
        self.loading = true;
        Some(self.request_token)
    }

    /// Apply a fetch result. Results for superseded tokens are ignored.
    ///
    /// A failed fetch leaves the previous count in place. Returns true when
    /// the result was applied.
    pub fn apply_status(&mut self, token: u64, result: &Result<StatusResponse, ApiError>) -> bool {
        if token != self.request_token {
            return false;
        }

        self.loading = false;
        if let Ok(status) = result {
            self.document_count = status.document_count;
        }
        true
    }

    pub fn documents_cleared(&mut self) {
        self.document_count = 0;
    }

    /// Text of the status line, without styling
    pub fn status_text(&self) -> String {
        let connection = if self.loading { STATUS_CONNECTING } else { STATUS_CONNECTED };
        let mut text = format!("{} | {} {}", connection, self.document_count, STATUS_CHUNKS_SUFFIX);
        if self.can_clear() {
            text.push_str(" | ");
            text.push_str(STATUS_CLEAR_HINT);
        }
        text
    }

    pub fn indicator_color(&self) -> Color {
        if self.loading {
            Color::Yellow
        } else {
            Color::Green
        }
    }

    fn status_line(&self) -> Line<'static> {
        let connection = if self.loading { STATUS_CONNECTING } else { STATUS_CONNECTED };
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let mut spans = vec![
            Span::styled(
                format!("{} ", self.icons.indicator()),
                Style::default().fg(self.indicator_color()),
            ),
            Span::styled(connection, Style::default().fg(Color::Gray)),
            separator.clone(),
            Span::raw(format!("{} ", self.icons.documents())),
            Span::styled(
                self.document_count.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", STATUS_CHUNKS_SUFFIX), Style::default().fg(Color::Gray)),
        ];

        if self.can_clear() {
            spans.push(separator);
            spans.push(Span::styled(STATUS_CLEAR_HINT, Style::default().fg(Color::Red)));
        }

        Line::from(spans)
    }
}

impl Component for StatusBarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Clearing is bound globally so it works from any pane
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::DocumentsCleared(_) = &action {
            self.documents_cleared();
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(self.status_line()).block(block);
        f.render_widget(paragraph, rect);
    }
}
