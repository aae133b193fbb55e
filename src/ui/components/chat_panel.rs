//! Chat panel: conversation history plus the question input.
//!
//! The panel owns the history. Each question is sent with every earlier
//! turn so the backend can resolve follow-ups.

use crate::api::{ChatMessage, ChatResponse, ChatRole};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{
    create_input_paragraph, create_instructions_paragraph, create_scrollbar, shortcuts,
};
use crate::ui::components::dialogs::scroll_behavior;
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, ScrollbarState},
    Frame,
};

/// One rendered turn of the conversation
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub content: String,
    pub sources: Vec<String>,
}

impl ChatEntry {
    fn to_message(&self) -> ChatMessage {
        ChatMessage {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

pub struct ChatPanelComponent {
    input: TextInput,
    entries: Vec<ChatEntry>,
    sending: bool,
    focused: bool,
    follow_tail: bool,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
    pub icons: IconService,
}

impl Default for ChatPanelComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatPanelComponent {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            entries: Vec::new(),
            sending: false,
            focused: false,
            follow_tail: true,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            icons: IconService::default(),
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn input(&self) -> &str {
        self.input.value()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input.set_value(value);
    }

    /// History sent along with the next question, `None` when empty
    pub fn history(&self) -> Option<Vec<ChatMessage>> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.iter().map(ChatEntry::to_message).collect())
        }
    }

    fn submit(&mut self) -> Action {
        if self.sending || self.input.is_blank() {
            return Action::None;
        }

        let query = self.input.value().trim().to_string();
        let history = self.history();

        self.entries.push(ChatEntry {
            role: ChatRole::User,
            content: query.clone(),
            sources: Vec::new(),
        });
        self.input.clear();
        self.sending = true;
        self.follow_tail = true;

        Action::SendChat { query, history }
    }

    fn answered(&mut self, response: &ChatResponse) {
        self.sending = false;
        self.entries.push(ChatEntry {
            role: ChatRole::Assistant,
            content: response.answer.clone(),
            sources: response.sources.clone(),
        });
        self.follow_tail = true;
    }

    fn history_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if self.entries.is_empty() {
            lines.push(Line::from(Span::styled(
                "Upload a document, then ask a question about it.",
                Style::default().fg(Color::DarkGray),
            )));
            return lines;
        }

        for entry in &self.entries {
            let (label, color) = match entry.role {
                ChatRole::User => (format!("{} You", self.icons.chat_user()), Color::Cyan),
                ChatRole::Assistant => (format!("{} Assistant", self.icons.chat_assistant()), Color::Green),
            };
            lines.push(Line::from(Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));

            for text in wrap_text(&entry.content, width) {
                lines.push(Line::from(Span::styled(text, Style::default().fg(Color::White))));
            }

            if !entry.sources.is_empty() {
                let sources = format!("{} Sources: {}", self.icons.sources(), entry.sources.join(", "));
                for text in wrap_text(&sources, width) {
                    lines.push(Line::from(Span::styled(
                        text,
                        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                    )));
                }
            }
            lines.push(Line::default());
        }

        if self.sending {
            lines.push(Line::from(Span::styled(
                format!("{} Thinking...", self.icons.thinking()),
                Style::default().fg(Color::Yellow),
            )));
        }

        lines
    }
}

impl Component for ChatPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::PageUp => {
                self.follow_tail = false;
                scroll_behavior::page_up(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            KeyCode::PageDown => {
                scroll_behavior::page_down(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            KeyCode::Up => {
                self.follow_tail = false;
                scroll_behavior::scroll_up(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            KeyCode::Down => {
                scroll_behavior::scroll_down(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            _ => {
                self.input.handle_key(key);
                Action::None
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::ChatAnswered(response) => self.answered(response),
            Action::ChatFailed(_) => {
                // The question stays in history so it is sent as context next time
                self.sending = false;
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
            .title(format!(" {} Ask About Your Documents ", self.icons.chat_assistant()))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(border_color));

        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(3), Constraint::Length(1)]).split(inner);
        let history_area = chunks[0];

        let lines = self.history_lines(history_area.width.saturating_sub(1) as usize);
        let visible_height = history_area.height as usize;
        if self.follow_tail {
            self.scroll_offset = usize::MAX;
        }
        let window = scroll_behavior::visible_window(
            &lines,
            visible_height,
            &mut self.scroll_offset,
            &mut self.scrollbar_state,
        );
        if self.scroll_offset + visible_height >= lines.len() {
            self.follow_tail = true;
        }

        f.render_widget(Paragraph::new(window.to_vec()), history_area);
        if lines.len() > visible_height {
            f.render_stateful_widget(create_scrollbar(), history_area, &mut self.scrollbar_state);
        }

        let title = if self.sending { "Waiting for answer" } else { "Question" };
        f.render_widget(create_input_paragraph(self.input.value(), title), chunks[1]);
        if self.focused {
            let cursor_x = chunks[1].x + 1 + self.input.cursor_position() as u16;
            f.set_cursor_position((cursor_x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1));
        }

        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::ENTER_SEND,
                shortcuts::SEPARATOR,
                shortcuts::SCROLL,
                shortcuts::SEPARATOR,
                shortcuts::TAB_SWITCH,
            ]),
            chunks[2],
        );
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    out.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                out.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > width {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        out.push(current);
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}
