use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::TestBackend, Terminal};
use study_assistant::ui::components::DialogComponent;
use study_assistant::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn rendered_text(dialog: &mut DialogComponent) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_clear_confirmation_confirmed() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ClearConfirmation));
    assert!(dialog.is_visible());

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::ClearDocuments));
    assert!(!dialog.is_visible());
}

#[test]
fn test_clear_confirmation_declined() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ClearConfirmation));

    let action = dialog.handle_key_events(key(KeyCode::Char('n')));
    assert!(matches!(action, Action::HideDialog));
    dialog.update(action);
    assert!(!dialog.is_visible());
}

#[test]
fn test_confirmation_ignores_other_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ClearConfirmation));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    assert!(dialog.is_visible());
}

#[test]
fn test_confirmation_renders_warning() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ClearConfirmation));

    let text = rendered_text(&mut dialog);
    assert!(text.contains("Clear All Documents"));
    assert!(text.contains("cannot be undone"));
}

#[test]
fn test_help_lists_key_bindings() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    let text = rendered_text(&mut dialog);
    assert!(text.contains("Ctrl+D"));
    assert!(text.contains("Switch between the upload and chat panes"));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}

#[test]
fn test_logs_dialog_shows_entries() {
    let mut dialog = DialogComponent::new();
    dialog.set_logs(vec!["[10:00:00.000] Status: 42 document chunks indexed".to_string()]);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let text = rendered_text(&mut dialog);
    assert!(text.contains("Status: 42 document chunks indexed"));
}

#[test]
fn test_logs_title_names_log_file() {
    let mut dialog = DialogComponent::new();
    dialog.set_log_file(Some(std::path::Path::new("/tmp/study-assistant.log")));
    dialog.update(Action::ShowDialog(DialogType::Logs));

    assert!(rendered_text(&mut dialog).contains("/tmp/study-assistant.log"));
}

#[test]
fn test_empty_logs_placeholder() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Logs));

    assert!(rendered_text(&mut dialog).contains("No log entries yet"));
}
