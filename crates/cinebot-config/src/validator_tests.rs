use super::*;
use crate::schema::RoomConfig;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_no_rooms() {
    let mut config = Config::default();
    config.rooms.clear();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "rooms"));
}

#[test]
fn test_validate_empty_room_label() {
    let mut config = Config::default();
    config.rooms.insert("4".to_string(), RoomConfig::new("  ", 1));

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "rooms.4.label"));
}

#[test]
fn test_validate_room_label_with_separator() {
    let mut config = Config::default();
    config
        .rooms
        .insert("4".to_string(), RoomConfig::new("Salle - 4", 1));

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
}

#[test]
fn test_validate_bad_console_url() {
    let mut config = Config::default();
    let mut room = RoomConfig::new("Salle 4", 1);
    room.console_url = Some("10.66.80.194:43744".to_string());
    config.rooms.insert("4".to_string(), room);

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "rooms.4.console_url"));
}

#[test]
fn test_validate_missing_console_url_warns() {
    let mut config = Config::default();
    config
        .rooms
        .insert("4".to_string(), RoomConfig::new("Salle 4", 1));

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "rooms.4.console_url"));
}

#[test]
fn test_validate_volume_range() {
    let mut config = Config::default();
    config.schedule.volume = 120;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "schedule.volume"));
}

#[test]
fn test_validate_silent_volume_warning() {
    let mut config = Config::default();
    config.schedule.volume = 0;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);

    config.schedule.set_volume = false;
    assert!(ConfigValidator::validate(&config).warnings.is_empty());
}

#[test]
fn test_validate_unknown_pattern_warns() {
    let mut config = Config::default();
    config.schedule.default_pattern = "45".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.path == "schedule.default_pattern" && w.message.contains("'45'")));

    config.schedule.default_pattern = "15".to_string();
    assert!(ConfigValidator::validate(&config).warnings.is_empty());
}

#[test]
fn test_validate_max_blocks() {
    let mut config = Config::default();
    config.selection.max_blocks = 0;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "selection.max_blocks"));
}

#[test]
fn test_validate_blank_target_title() {
    let mut config = Config::default();
    config.selection.target_title = Some(" ".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
}

#[test]
fn test_validate_retry_delays() {
    let mut config = Config::default();
    config.retry.max_delay_ms = 100;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "retry.max_delay_ms"));
}

#[test]
fn test_validate_high_retries_warning() {
    let mut config = Config::default();
    config.retry.max_retries = 50;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(!result.warnings.is_empty());
}

#[test]
fn test_into_result() {
    let mut config = Config::default();
    config.selection.max_blocks = 0;

    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    assert!(err.to_string().contains("selection.max_blocks"));

    let warnings = ConfigValidator::validate(&Config::default())
        .into_result()
        .unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn test_validation_result_default() {
    let result = ValidationResult::default();
    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}
