use thiserror::Error;

use crate::core::types::{FactionId, ZoneId};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown faction: {0:?}")]
    UnknownFaction(FactionId),

    #[error("Unknown zone: {0:?}")]
    UnknownZone(ZoneId),

    #[error("Invalid relation between {0:?} and {1:?}")]
    InvalidRelation(FactionId, FactionId),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Game is over; state is frozen")]
    GameOver,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
