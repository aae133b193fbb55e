use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A piece of the screen that reacts to keys and to actions passing through it.
pub trait Component {
    /// Translate a key press into an action. Unhandled keys return `Action::None`.
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Observe an action on its way to the app shell.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Focus changes between input panes
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
