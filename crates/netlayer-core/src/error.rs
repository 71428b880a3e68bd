use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for netlayer.
#[derive(Error, Debug)]
pub enum NetlayerError {
    // ── Override file errors ───────────────────────────────────
    /// An explicitly configured override path does not exist. `path` is the
    /// configured value, verbatim.
    #[error("configuration file not found under \"{option}\" path: {path};")]
    MissingConfigFile { option: String, path: String },

    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("unsupported config format '.{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    // ── Project errors ─────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("toml serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, NetlayerError>;
