//! Application error type.

use std::path::PathBuf;

/// Errors from the application layer. The simulation itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `AppConfig`.
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config parsed but holds unusable values.
    #[error("invalid config: {0}")]
    Config(String),

    /// Reading player input failed.
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),

    /// The game loop thread could not be started.
    #[error("failed to spawn game loop: {0}")]
    Spawn(#[source] std::io::Error),

    /// The game loop thread panicked.
    #[error("game loop panicked: {0}")]
    Panicked(String),

    /// The game loop thread is gone.
    #[error("game loop channel closed")]
    ChannelClosed,
}
