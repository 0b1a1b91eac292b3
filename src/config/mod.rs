//! Configuration module for dtomap
//!
//! Configuration hierarchy:
//! 1. Environment variables (DTOMAP_*)
//! 2. Project config (`dtomap.toml` in the project root)
//! 3. User config (`<config dir>/dtomap/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, parse_with_warnings, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CacheConfig, CoercionConfig, MapperConfig};
