//! Banner for the single live notification.

use crate::icons::IconService;
use crate::ui::core::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct NotificationBanner;

impl NotificationBanner {
    pub fn color(kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        }
    }

    pub fn render(f: &mut Frame, rect: Rect, notification: &Notification, icons: &IconService) {
        if rect.height == 0 {
            return;
        }

        let color = Self::color(notification.kind);
        let icon = match notification.kind {
            NotificationKind::Success => icons.success(),
            NotificationKind::Error => icons.error(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color));

        let line = Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(notification.message.clone(), Style::default().fg(Color::White)),
        ]);

        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(line).block(block).wrap(Wrap { trim: true }), rect);
    }
}
