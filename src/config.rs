use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::{
    DEFAULT_INDEX_FILE, DEFAULT_PORT, DEFAULT_PUBLIC_DIR, EXAM_STARTS_AT, GROUP_A_PATH,
    GROUP_B_PATH,
};
use crate::domain::Group;
use crate::error::{PortalError, Result};
use crate::schema::SourceSchema;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub sources: SourcesConfig,
    pub server: ServerConfig,
    pub exam: ExamConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub group_a_path: String,
    pub group_b_path: String,
    /// Fetch sources over HTTP from this origin instead of the public directory
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub public_dir: String,
    pub index_file: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExamConfig {
    pub starts_at: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            group_a_path: GROUP_A_PATH.to_string(),
            group_b_path: GROUP_B_PATH.to_string(),
            base_url: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            public_dir: DEFAULT_PUBLIC_DIR.to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
        }
    }
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            starts_at: EXAM_STARTS_AT.to_string(),
        }
    }
}

impl PortalConfig {
    /// Load from `path`; a missing file means defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            PortalError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content).map_err(|e| {
            PortalError::Config(format!("Invalid config file '{}': {}", path.display(), e))
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn schema(&self, group: Group) -> SourceSchema {
        let path = match group {
            Group::A => &self.sources.group_a_path,
            Group::B => &self.sources.group_b_path,
        };
        SourceSchema::for_group(group).with_path(path.clone())
    }
}
