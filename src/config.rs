use std::env;
use std::path::PathBuf;

use crate::entities::Difficulty;
use crate::error::ConfigError;

pub const DEFAULT_FPS: u32 = 60;
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

/// Startup settings, read from `SHOOTER_*` environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Fixed RNG seed; entropy when unset.
    pub seed: Option<u64>,
    pub fps: u32,
    /// Skip the start screen and play this difficulty straight away.
    pub difficulty: Option<Difficulty>,
    /// Log destination.  The game owns the terminal, so logs go here.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fps: DEFAULT_FPS,
            difficulty: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key → value source.  Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed = get("SHOOTER_SEED")
            .map(|v| parse_u64("SHOOTER_SEED", &v))
            .transpose()?;

        let fps = match get("SHOOTER_FPS") {
            Some(v) => {
                let fps = parse_u64("SHOOTER_FPS", &v)?;
                if !(u64::from(MIN_FPS)..=u64::from(MAX_FPS)).contains(&fps) {
                    return Err(ConfigError::OutOfRange {
                        key: "SHOOTER_FPS",
                        value: fps,
                        min: u64::from(MIN_FPS),
                        max: u64::from(MAX_FPS),
                    });
                }
                fps as u32
            }
            None => DEFAULT_FPS,
        };

        let difficulty = get("SHOOTER_DIFFICULTY")
            .map(|v| v.parse::<Difficulty>())
            .transpose()?;

        let log_file = get("SHOOTER_LOG_FILE").map(PathBuf::from);

        Ok(Self {
            seed,
            fps,
            difficulty,
            log_file,
        })
    }
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
