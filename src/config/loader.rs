//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{MapError, MapResult};

use super::types::MapperConfig;

/// Project-level config file, relative to the project root
pub const PROJECT_CONFIG_FILE: &str = "dtomap.toml";

/// Non-fatal configuration warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MapResult<(MapperConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text, attributing warnings and errors to `path`
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MapResult<(MapperConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: MapperConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MapError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> MapperConfig {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user = dirs::config_dir().map(|dir| dir.join("dtomap").join("config.toml"));

    for candidate in project.into_iter().chain(user) {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                for w in &warnings {
                    warn!(
                        key = %w.key,
                        file = %w.file.display(),
                        suggestion = ?w.suggestion,
                        "Unknown configuration key"
                    );
                }
                return with_env_overrides(config);
            }
            Err(e) => {
                warn!(file = %candidate.display(), error = %e, "Ignoring unreadable config");
            }
        }
    }

    with_env_overrides(MapperConfig::default())
}

/// Apply environment variable overrides (DTOMAP_* prefix)
pub fn with_env_overrides(config: MapperConfig) -> MapperConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`
///
/// Recognized keys: `DTOMAP_CACHE_ENABLED`, `DTOMAP_ENUM_IGNORE_CASE`.
pub fn apply_overrides<F>(mut config: MapperConfig, lookup: F) -> MapperConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("DTOMAP_CACHE_ENABLED") {
        config.cache.enabled = parse_flag(&val);
    }

    if let Some(val) = lookup("DTOMAP_ENUM_IGNORE_CASE") {
        config.coercion.enum_ignore_case = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "coercion",
        "enum_ignore_case",
        "date_formats",
        "datetime_formats",
        "cache",
        "enabled",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != *bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b.len()]
}
