//! Server configuration loaded once at startup from a JSON file.

use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

#[derive(Debug, Deserialize)]
struct RawConfig {
    port: i64,
    #[serde(alias = "db_conn_str")]
    db_connection_string: String,
}

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub db_connection_string: String,
}

impl ServerConfig {
    /// Read and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!(path = %path.display(), "loading configuration");
        let bytes = std::fs::read(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&bytes, path)
    }

    /// Parse and validate config from raw JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        Self::parse(bytes, Path::new("<inline>"))
    }

    fn parse(bytes: &[u8], path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_slice(bytes)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        let port = u16::try_from(raw.port)
            .ok()
            .filter(|p| *p > 0)
            .ok_or(ConfigError::InvalidPort(raw.port))?;
        if raw.db_connection_string.trim().is_empty() {
            return Err(ConfigError::MissingConnectionString);
        }
        Ok(Self { port, db_connection_string: raw.db_connection_string })
    }
}
