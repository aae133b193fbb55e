use super::common::{create_dialog_block, create_instructions_paragraph, create_scrollbar, shortcuts};
use super::scroll_behavior::visible_window;
use crate::constants::{CLEAR_CONFIRMATION_MESSAGE, DIALOG_TITLE_LOGS};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};
use std::path::Path;

const HELP_TEXT: &str = r"
STUDY ASSISTANT - Terminal Client
=================================

Upload lecture slides or notes, then ask questions about them.
Answers cite the documents they were drawn from.

PANES
-----
Tab         Switch between the upload and chat panes
Enter       Upload the file path / send the question
←/→         Move the cursor in the input line
Home/End    Jump to the start/end of the input line
PgUp/PgDn   Scroll the chat history

DOCUMENTS
---------
Ctrl+R      Refresh the indexed document count
Ctrl+D      Clear all documents (asks for confirmation)

Accepted files: PDF (.pdf) and PowerPoint (.pptx)

GENERAL
-------
F1          Toggle this help
F2          Change icon theme
Ctrl+L      Show logs
Esc         Close a dialog, or quit
Ctrl+C      Quit application
";

pub fn render_clear_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} Clear All Documents ", icons.warning()), Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(CLEAR_CONFIRMATION_MESSAGE)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(message, chunks[0]);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[1],
    );
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let lines: Vec<&str> = HELP_TEXT.lines().collect();
    let title = format!(" {} Help ", icons.info());
    render_scrollable_dialog(f, area, title, Color::Cyan, &lines, scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    log_file: Option<&Path>,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let lines: Vec<&str> = if logs.is_empty() {
        vec!["No log entries yet"]
    } else {
        logs.iter().flat_map(|entry| entry.lines()).collect()
    };
    let title = match log_file {
        Some(path) => format!(" {} ({}) ", DIALOG_TITLE_LOGS, path.display()),
        None => format!(" {} ", DIALOG_TITLE_LOGS),
    };
    render_scrollable_dialog(f, area, title, Color::White, &lines, scroll_offset, scrollbar_state);
}

fn render_scrollable_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    lines: &[&str],
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(85, 85, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let content_area = chunks[0];
    let visible_height = content_area.height as usize;
    let window = visible_window(lines, visible_height, scroll_offset, scrollbar_state);

    let paragraph = Paragraph::new(window.join("\n"))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, content_area);

    f.render_widget(
        create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE]),
        chunks[1],
    );

    if lines.len() > visible_height {
        f.render_stateful_widget(create_scrollbar(), content_area, scrollbar_state);
    }
}
