use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use study_assistant::api::{ApiError, StatusResponse};
use study_assistant::ui::components::StatusBarComponent;
use study_assistant::ui::core::{Component, RefreshSignal};

fn ok_status(count: u64) -> Result<StatusResponse, ApiError> {
    Ok(StatusResponse {
        status: "ok".to_string(),
        message: String::new(),
        document_count: count,
    })
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render(bar: &mut StatusBarComponent) -> Buffer {
    let backend = TestBackend::new(90, 3);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| bar.render(f, f.area())).unwrap();
    terminal.backend().buffer().clone()
}

fn indicator_color(buffer: &Buffer, indicator: &str) -> Option<Color> {
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            if cell.symbol() == indicator {
                return Some(cell.fg);
            }
        }
    }
    None
}

#[test]
fn test_fetches_once_per_signal_value() {
    let mut bar = StatusBarComponent::new();
    let signal = RefreshSignal::default();

    assert_eq!(bar.observe_refresh(signal), Some(1));
    assert_eq!(bar.observe_refresh(signal), None);
    assert_eq!(bar.observe_refresh(signal), None);

    let next = signal.next();
    assert_eq!(bar.observe_refresh(next), Some(2));
    assert_eq!(bar.observe_refresh(next), None);
}

#[test]
fn test_renders_connected_count() {
    let mut bar = StatusBarComponent::new();
    let token = bar.observe_refresh(RefreshSignal::default()).unwrap();
    assert!(bar.apply_status(token, &ok_status(42)));

    let buffer = render(&mut bar);
    let text = buffer_text(&buffer);
    assert!(text.contains("42 document chunks indexed"), "rendered: {}", text);
    assert!(text.contains("Connected"));
    assert!(text.contains("Ctrl+D: Clear All Documents"));

    let indicator = bar.icons.indicator();
    assert_eq!(indicator_color(&buffer, indicator), Some(Color::Green));
}

#[test]
fn test_renders_connecting_while_loading() {
    let mut bar = StatusBarComponent::new();
    bar.observe_refresh(RefreshSignal::default());

    let buffer = render(&mut bar);
    let text = buffer_text(&buffer);
    assert!(text.contains("Connecting..."));
    assert!(text.contains("0 document chunks indexed"));
    assert!(!text.contains("Ctrl+D"));

    let indicator = bar.icons.indicator();
    assert_eq!(indicator_color(&buffer, indicator), Some(Color::Yellow));
}

#[test]
fn test_first_failure_shows_zero() {
    let mut bar = StatusBarComponent::new();
    let token = bar.observe_refresh(RefreshSignal::default()).unwrap();
    bar.apply_status(token, &Err(ApiError::Network("connection refused".to_string())));

    assert!(!bar.is_loading());
    assert_eq!(bar.document_count(), 0);
    assert!(!bar.can_clear());
    assert_eq!(bar.status_text(), "Connected | 0 document chunks indexed");
}

#[test]
fn test_clear_resets_count() {
    let mut bar = StatusBarComponent::new();
    let token = bar.observe_refresh(RefreshSignal::default()).unwrap();
    bar.apply_status(token, &ok_status(7));
    assert!(bar.can_clear());

    bar.documents_cleared();
    assert_eq!(bar.document_count(), 0);
    assert!(!bar.can_clear());
}
