use std::collections::HashMap;
use std::path::PathBuf;

use space_shooter::config::*;
use space_shooter::entities::Difficulty;
use space_shooter::error::ConfigError;

fn load(pairs: &[(&str, &str)]) -> Result<GameConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    GameConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_gives_defaults() {
    assert_eq!(load(&[]), Ok(GameConfig::default()));
    assert_eq!(GameConfig::default().fps, DEFAULT_FPS);
}

#[test]
fn reads_every_variable() {
    let config = load(&[
        ("SHOOTER_SEED", "42"),
        ("SHOOTER_FPS", "30"),
        ("SHOOTER_DIFFICULTY", "Hard"),
        ("SHOOTER_LOG_FILE", "/tmp/shooter.log"),
    ])
    .expect("valid config");

    assert_eq!(config.seed, Some(42));
    assert_eq!(config.fps, 30);
    assert_eq!(config.difficulty, Some(Difficulty::Hard));
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/shooter.log")));
}

#[test]
fn blank_values_count_as_unset() {
    let config = load(&[("SHOOTER_SEED", "  "), ("SHOOTER_DIFFICULTY", "")]).expect("valid");
    assert_eq!(config.seed, None);
    assert_eq!(config.difficulty, None);
}

#[test]
fn rejects_bad_numbers() {
    assert_eq!(
        load(&[("SHOOTER_SEED", "abc")]),
        Err(ConfigError::InvalidNumber {
            key: "SHOOTER_SEED",
            value: "abc".to_string()
        })
    );
}

#[test]
fn rejects_fps_out_of_range() {
    let err = load(&[("SHOOTER_FPS", "0")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::OutOfRange {
            key: "SHOOTER_FPS",
            value: 0,
            min: 1,
            max: 240
        }
    );
    assert_eq!(err.to_string(), "SHOOTER_FPS: 0 out of range (allowed 1..=240)");
    assert!(load(&[("SHOOTER_FPS", "241")]).is_err());
    assert!(load(&[("SHOOTER_FPS", "240")]).is_ok());
}

#[test]
fn rejects_unknown_difficulty() {
    let err = load(&[("SHOOTER_DIFFICULTY", "insane")]).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownDifficulty { .. }));
    assert!(err.to_string().contains("insane"));
}

#[test]
fn config_error_becomes_invalid_input() {
    let io: std::io::Error = ConfigError::UnknownDifficulty {
        value: "x".to_string(),
    }
    .into();
    assert_eq!(io.kind(), std::io::ErrorKind::InvalidInput);
}
