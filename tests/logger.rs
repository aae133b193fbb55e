use study_assistant::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    logger.log("third".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].ends_with("third"));
    assert!(logs[2].ends_with("first"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());

    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_file_logging() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("study-assistant.log");

    let logger = Logger::with_log_file(&path).unwrap();
    assert!(logger.is_enabled());
    logger.log("Test message with file".to_string());
    log::logger().flush();

    // Only the first installation in a process takes effect
    let active = logger.log_file().unwrap();
    if active == path.as_path() {
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Test message with file"));
    }
}

#[test]
fn test_log_file_path_is_under_data_dir() {
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("study-assistant/study-assistant.log"));
    }
}
