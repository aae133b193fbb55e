use std::time::{Duration, Instant};
use study_assistant::ui::core::{AppState, FocusPane, NotificationKind, RefreshSignal};

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(state.notification().is_none());
    assert_eq!(state.refresh_signal(), RefreshSignal::default());
    assert_eq!(state.refresh_signal().value(), 0);
    assert_eq!(state.focus, FocusPane::Chat);
    assert!(state.backend_version.is_none());
}

#[test]
fn test_notification_expires_after_timeout() {
    let start = Instant::now();
    let mut state = AppState::new(Duration::from_secs(5));
    state.show_notification(NotificationKind::Success, "Uploaded lecture1.pdf", start);

    assert!(!state.expire_notifications(start + Duration::from_millis(4999)));
    assert!(state.notification().is_some());

    assert!(state.expire_notifications(start + Duration::from_secs(5)));
    assert!(state.notification().is_none());
}

#[test]
fn test_only_one_notification_is_visible() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.show_notification(NotificationKind::Success, "first", now);
    state.show_notification(NotificationKind::Error, "second", now);

    let notification = state.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "second");
}

#[test]
fn test_focus_cycles_between_panes() {
    assert_eq!(FocusPane::Chat.next(), FocusPane::Upload);
    assert_eq!(FocusPane::Upload.next(), FocusPane::Chat);
}
