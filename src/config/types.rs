//! Configuration type definitions

use std::path::Path;

use serde::Deserialize;

use crate::error::MapResult;

use super::loader::{self, ConfigWarning};

/// Value coercion settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoercionConfig {
    /// Match enum member names without regard to case
    #[serde(default = "default_true")]
    pub enum_ignore_case: bool,

    /// `chrono` formats tried, in order, when parsing dates from text
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,

    /// `chrono` formats tried after RFC 3339 when parsing timestamps
    #[serde(default = "default_datetime_formats")]
    pub datetime_formats: Vec<String>,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            enum_ignore_case: true,
            date_formats: default_date_formats(),
            datetime_formats: default_datetime_formats(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_date_formats() -> Vec<String> {
    ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_datetime_formats() -> Vec<String> {
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Plan cache settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// When false every mapping call builds a fresh plan
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct MapperConfig {
    #[serde(default)]
    pub coercion: CoercionConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl MapperConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MapResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (DTOMAP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
