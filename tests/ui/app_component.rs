use crate::mock_api::MockApi;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use study_assistant::config::Config;
use study_assistant::constants::{ERROR_NOTHING_TO_CLEAR, ERROR_UPLOAD_IN_PROGRESS};
use study_assistant::logger::Logger;
use study_assistant::ui::app_component::AppComponent;
use study_assistant::ui::core::{DialogType, EventType, FocusPane, NotificationKind};

fn new_app(api: Arc<MockApi>) -> AppComponent {
    AppComponent::new(api, &Config::default(), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::from(code)));
}

fn press_ctrl(app: &mut AppComponent, c: char) {
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
}

/// Apply background results until `done` holds
async fn settle(app: &mut AppComponent, mut done: impl FnMut(&AppComponent) -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async move {
        while !done(app) {
            app.next_background_action().await;
        }
    })
    .await
    .expect("background work did not settle");
}

async fn started(api: Arc<MockApi>) -> AppComponent {
    let mut app = new_app(api);
    app.start();
    settle(&mut app, |app| !app.status_bar().is_loading() && app.state().backend_version.is_some()).await;
    app
}

fn notification(app: &AppComponent) -> (NotificationKind, String) {
    let notification = app.state().notification().expect("a notification should be visible");
    (notification.kind, notification.message.clone())
}

fn write_pdf(dir: &tempfile::TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, b"%PDF-1.4 test").unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_initial_fetch_happens_once() {
    let api = Arc::new(MockApi::with_documents(42));
    let mut app = started(api.clone()).await;

    assert_eq!(app.status_bar().document_count(), 42);
    assert_eq!(app.state().backend_version.as_deref(), Some("1.0.0"));
    assert_eq!(api.status_calls(), 1);

    // Ticks with an unchanged signal do not fetch again
    for _ in 0..3 {
        app.tick(Instant::now());
    }
    tokio::time::sleep(Duration::from_millis(20)).await;
    app.tick(Instant::now());
    assert_eq!(api.status_calls(), 1);
    assert_eq!(app.active_task_count(), 0);
}

#[tokio::test]
async fn test_finished_tasks_are_logged() {
    let logger = Logger::new();
    let mut app = AppComponent::new(Arc::new(MockApi::with_documents(2)), &Config::default(), logger.clone());
    app.start();
    settle(&mut app, |app| !app.status_bar().is_loading() && app.state().backend_version.is_some()).await;

    tokio::time::sleep(Duration::from_millis(20)).await;
    app.tick(Instant::now());

    let logs = logger.get_logs();
    assert!(logs.iter().any(|line| line.contains("Background: StatusFetch task #")));
    assert!(logs.iter().any(|line| line.contains("Background: HealthCheck task #")));
}

#[tokio::test]
async fn test_upload_success_refreshes_count() {
    let api = Arc::new(MockApi::with_documents(10));
    let mut app = started(api.clone()).await;
    let dir = tempfile::tempdir().unwrap();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, FocusPane::Upload);
    app.upload_pane_mut().set_input(write_pdf(&dir, "lecture1.pdf"));
    press(&mut app, KeyCode::Enter);
    assert!(app.upload_pane().is_uploading());

    settle(&mut app, |app| app.status_bar().document_count() == 15 && !app.status_bar().is_loading()).await;

    let (kind, message) = notification(&app);
    assert_eq!(kind, NotificationKind::Success);
    assert!(message.contains("lecture1.pdf"));
    assert!(message.contains("5 chunks added"));

    assert_eq!(app.state().refresh_signal().value(), 1);
    assert_eq!(api.upload_calls(), 1);
    assert_eq!(api.status_calls(), 2);
    assert!(!app.upload_pane().is_uploading());
    assert!(app.upload_pane().input().is_empty());
}

#[tokio::test]
async fn test_upload_failure_leaves_signal_unchanged() {
    let api = Arc::new(MockApi {
        fail_uploads: true,
        ..MockApi::with_documents(3)
    });
    let mut app = started(api.clone()).await;
    let dir = tempfile::tempdir().unwrap();

    press(&mut app, KeyCode::Tab);
    app.upload_pane_mut().set_input(write_pdf(&dir, "broken.pdf"));
    press(&mut app, KeyCode::Enter);

    settle(&mut app, |app| !app.upload_pane().is_uploading()).await;

    let (kind, message) = notification(&app);
    assert_eq!(kind, NotificationKind::Error);
    assert!(message.contains("corrupt PDF"));
    assert_eq!(app.state().refresh_signal().value(), 0);
    assert_eq!(api.status_calls(), 1);
    assert_eq!(app.status_bar().document_count(), 3);
}

#[tokio::test]
async fn test_invalid_path_never_reaches_backend() {
    let api = Arc::new(MockApi::with_documents(0));
    let mut app = started(api.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("notes.txt");
    std::fs::write(&txt, "plain").unwrap();

    press(&mut app, KeyCode::Tab);
    app.upload_pane_mut().set_input(txt.to_string_lossy().into_owned());
    press(&mut app, KeyCode::Enter);

    let (kind, message) = notification(&app);
    assert_eq!(kind, NotificationKind::Error);
    assert!(message.contains("Unsupported file type"));
    assert!(!app.upload_pane().is_uploading());
    assert_eq!(api.upload_calls(), 0);
}

#[tokio::test]
async fn test_second_upload_rejected_while_in_flight() {
    let api = Arc::new(MockApi::with_documents(0));
    let mut app = started(api.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(&dir, "week2.pdf");

    press(&mut app, KeyCode::Tab);
    app.upload_pane_mut().set_input(path.clone());
    press(&mut app, KeyCode::Enter);

    app.upload_pane_mut().set_input(path);
    press(&mut app, KeyCode::Enter);
    assert_eq!(notification(&app), (NotificationKind::Error, ERROR_UPLOAD_IN_PROGRESS.to_string()));

    settle(&mut app, |app| !app.upload_pane().is_uploading()).await;
    assert_eq!(api.upload_calls(), 1);
}

#[tokio::test]
async fn test_clear_confirmed() {
    let api = Arc::new(MockApi::with_documents(42));
    let mut app = started(api.clone()).await;

    press_ctrl(&mut app, 'd');
    assert_eq!(app.dialog().dialog_type, Some(DialogType::ClearConfirmation));

    press(&mut app, KeyCode::Char('y'));
    assert!(!app.dialog().is_visible());

    settle(&mut app, |app| app.state().refresh_signal().value() == 1 && !app.status_bar().is_loading()).await;

    assert_eq!(api.clear_calls(), 1);
    assert_eq!(app.status_bar().document_count(), 0);
    assert_eq!(api.status_calls(), 2);
    assert_eq!(notification(&app).0, NotificationKind::Success);
}

#[tokio::test]
async fn test_clear_failure_notifies() {
    let api = Arc::new(MockApi {
        fail_clear: true,
        ..MockApi::with_documents(42)
    });
    let mut app = started(api.clone()).await;

    press_ctrl(&mut app, 'd');
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, |app| app.state().notification().is_some()).await;

    let (kind, message) = notification(&app);
    assert_eq!(kind, NotificationKind::Error);
    assert!(message.contains("vector store unavailable"));
    assert_eq!(api.clear_calls(), 1);
    assert_eq!(app.status_bar().document_count(), 42);
    assert_eq!(app.state().refresh_signal().value(), 0);
    assert_eq!(api.status_calls(), 1);
}

#[tokio::test]
async fn test_clear_declined() {
    let api = Arc::new(MockApi::with_documents(42));
    let mut app = started(api.clone()).await;

    press_ctrl(&mut app, 'd');
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    tokio::time::sleep(Duration::from_millis(20)).await;
    app.tick(Instant::now());

    assert_eq!(api.clear_calls(), 0);
    assert_eq!(app.status_bar().document_count(), 42);
}

#[tokio::test]
async fn test_clear_needs_documents() {
    let api = Arc::new(MockApi::with_documents(0));
    let mut app = started(api.clone()).await;

    press_ctrl(&mut app, 'd');
    assert!(!app.dialog().is_visible());
    assert_eq!(notification(&app), (NotificationKind::Error, ERROR_NOTHING_TO_CLEAR.to_string()));
}

#[tokio::test]
async fn test_chat_sends_history() {
    let api = Arc::new(MockApi::with_documents(4));
    let mut app = started(api.clone()).await;

    app.chat_panel_mut().set_input("What is osmosis?");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, |app| !app.chat_panel().is_sending()).await;

    app.chat_panel_mut().set_input("Give an example");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, |app| !app.chat_panel().is_sending()).await;

    let requests = api.chat_requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].1.is_none());
    assert_eq!(requests[1].1.as_ref().map(Vec::len), Some(2));

    let entries = app.chat_panel().entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[1].sources, vec!["lecture1.pdf".to_string()]);
}

#[tokio::test]
async fn test_chat_error_notifies() {
    let api = Arc::new(MockApi {
        fail_chat: true,
        ..MockApi::with_documents(4)
    });
    let mut app = started(api.clone()).await;

    app.chat_panel_mut().set_input("Anything?");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, |app| !app.chat_panel().is_sending()).await;

    let (kind, message) = notification(&app);
    assert_eq!(kind, NotificationKind::Error);
    assert!(message.contains("Failed to get an answer"));
    assert_eq!(app.chat_panel().entries().len(), 1);
}

#[tokio::test]
async fn test_notification_disappears_after_timeout() {
    let api = Arc::new(MockApi::with_documents(0));
    let mut app = started(api).await;

    press_ctrl(&mut app, 'd');
    assert!(app.state().notification().is_some());

    app.tick(Instant::now() + Duration::from_secs(6));
    assert!(app.state().notification().is_none());
}

#[tokio::test]
async fn test_health_failure_notifies() {
    let api = Arc::new(MockApi {
        fail_health: true,
        ..MockApi::with_documents(0)
    });
    let mut app = new_app(api);
    app.start();
    settle(&mut app, |app| app.state().notification().is_some()).await;

    let (kind, message) = notification(&app);
    assert_eq!(kind, NotificationKind::Error);
    assert!(message.contains("Backend unreachable"));
}

#[tokio::test]
async fn test_manual_refresh_fetches_again() {
    let api = Arc::new(MockApi::with_documents(1));
    let mut app = started(api.clone()).await;

    api.document_count.store(9, std::sync::atomic::Ordering::SeqCst);
    press_ctrl(&mut app, 'r');
    settle(&mut app, |app| app.status_bar().document_count() == 9).await;
    assert_eq!(api.status_calls(), 2);
}

#[tokio::test]
async fn test_global_keys() {
    let api = Arc::new(MockApi::with_documents(0));
    let mut app = new_app(api);

    press(&mut app, KeyCode::F(1));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    press_ctrl(&mut app, 'l');
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
    press_ctrl(&mut app, 'l');
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}
