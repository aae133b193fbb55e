//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the main view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub header: Rect,
    pub notification: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, notification slot, body and status bar.
    ///
    /// The notification row collapses to zero height when nothing is shown.
    #[must_use]
    pub fn main_layout(area: Rect, has_notification: bool) -> MainAreas {
        let notification_height = if has_notification { 3 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(notification_height),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        MainAreas {
            header: chunks[0],
            notification: chunks[1],
            body: chunks[2],
            status: chunks[3],
        }
    }

    /// Upload pane on the left, chat on the right
    #[must_use]
    pub fn body_layout(area: Rect) -> (Rect, Rect) {
        let upload_width = std::cmp::min(area.width / 3, 48).max(std::cmp::min(area.width, 28));

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(upload_width), Constraint::Min(0)])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_row_collapses_when_empty() {
        let area = Rect::new(0, 0, 100, 40);

        let without = LayoutManager::main_layout(area, false);
        assert_eq!(without.notification.height, 0);
        assert_eq!(without.status.height, 3);
        assert_eq!(without.body.height, 35);

        let with = LayoutManager::main_layout(area, true);
        assert_eq!(with.notification.height, 3);
        assert_eq!(with.body.height, 32);
    }

    #[test]
    fn body_split_covers_full_width() {
        let (upload, chat) = LayoutManager::body_layout(Rect::new(0, 0, 120, 30));
        assert_eq!(upload.width + chat.width, 120);
        assert_eq!(upload.width, 40);
    }
}
