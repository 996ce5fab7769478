//! Configuration loading for tincan documents.
//!
//! Reads `~/.tincan/config.toml`. The raw TOML structs keep every field
//! optional; [`TinCanConfig::document_defaults`] resolves them into the
//! validated [`DocumentDefaults`] from `tincan-types`.
//!
//! ```toml
//! [documents]
//! default_content_type = "application/json"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tincan_types::{DefaultsError, DocumentDefaults};
use toml::de::Error as TomlError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: TomlError,
    },
    #[error(transparent)]
    Defaults(#[from] DefaultsError),
}

#[derive(Debug, Default, Deserialize)]
pub struct TinCanConfig {
    pub documents: Option<DocumentsConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DocumentsConfig {
    /// Content type given to documents that do not set one.
    pub default_content_type: Option<String>,
}

impl TinCanConfig {
    /// Load the user config. A missing file yields `None`; an unreadable or
    /// malformed one is logged and also yields `None`.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, TomlError> {
        toml::from_str(content)
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve the `[documents]` table. `None` when no default is configured.
    pub fn document_defaults(&self) -> Result<Option<DocumentDefaults>, ConfigError> {
        let Some(content_type) = self
            .documents
            .as_ref()
            .and_then(|documents| documents.default_content_type.as_deref())
        else {
            return Ok(None);
        };

        let defaults = DocumentDefaults::new(content_type)?;
        tracing::debug!(
            content_type = defaults.content_type(),
            "resolved document defaults"
        );
        Ok(Some(defaults))
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tincan").join("config.toml"))
}
