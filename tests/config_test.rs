//! Tests for TOML configuration loading and overrides.

use std::io::Write;
use std::time::Duration;
use tictactoe::{AppConfig, Overrides};
use tictactoe_engine::{Seat, SeatConfig, StrategyKind};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_config_loads() {
    let file = write_config(
        r#"
pacing_ms = 250
seed = 7

[seats]
one = "heuristic"
two = "optimal"
"#,
    );

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.seats().one, Seat::Computer(StrategyKind::Heuristic));
    assert_eq!(config.seats().two, Seat::Computer(StrategyKind::Exhaustive));
    assert_eq!(config.pacing(), Duration::from_millis(250));
    assert_eq!(*config.seed(), Some(7));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("[seats]\ntwo = \"human\"\n");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.seats().one, Seat::Human);
    assert_eq!(config.seats().two, Seat::Human);
    assert_eq!(*config.pacing_ms(), 1000);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_unknown_seat_is_rejected() {
    let file = write_config("[seats]\none = \"robot\"\n");

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.seats(), SeatConfig::default());
}

#[test]
fn test_unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_overrides_win_over_file() {
    let overrides = Overrides {
        preset: SeatConfig::preset(4),
        two: Some(Seat::Human),
        pacing_ms: Some(0),
        seed: Some(3),
        ..Overrides::default()
    };

    let config = AppConfig::default().with_overrides(&overrides);
    assert_eq!(config.seats().one, Seat::Computer(StrategyKind::Exhaustive));
    assert_eq!(config.seats().two, Seat::Human);
    assert_eq!(config.pacing(), Duration::ZERO);
    assert_eq!(*config.seed(), Some(3));
}

#[test]
fn test_empty_overrides_change_nothing() {
    let config = AppConfig::new(SeatConfig::preset(2).expect("preset"), 10, Some(1));
    assert_eq!(config.clone().with_overrides(&Overrides::default()), config);
}
