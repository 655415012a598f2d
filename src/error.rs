use std::fmt;

/// Rejected startup configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    OutOfRange { key: &'static str, value: u64, min: u64, max: u64 },
    UnknownDifficulty { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "{key}: expected a number, got {value:?}")
            }
            Self::OutOfRange {
                key,
                value,
                min,
                max,
            } => write!(f, "{key}: {value} out of range (allowed {min}..={max})"),
            Self::UnknownDifficulty { value } => {
                write!(f, "unknown difficulty {value:?} (expected easy, medium or hard)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
