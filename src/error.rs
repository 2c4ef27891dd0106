//! Error types

use thiserror::Error;

/// An external command could not be run or exited non-zero.
#[derive(Debug, Error)]
pub enum CommandExecutionError {
    #[error("error running command {command}: {stderr}")]
    Failed { command: String, stderr: String },

    #[error("failed to spawn command {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// A process-table line that is not three numeric fields.
#[derive(Debug, Error)]
#[error("malformed process line {line:?}: {reason}")]
pub struct MalformedProcessLineError {
    pub line: String,
    pub reason: String,
}

/// Why a single user's stats could not be collected.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Command(#[from] CommandExecutionError),

    #[error(transparent)]
    Malformed(#[from] MalformedProcessLineError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
