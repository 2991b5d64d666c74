//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use loadpath::GraphConfiguration;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Contents of a configuration file.
///
/// ```toml
/// [graph]
/// perfect_dependency_threshold = 2
/// good_dependency_threshold = 5
/// counting_method = "all_dependent"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    graph: GraphConfiguration,
}

impl AppConfig {
    pub fn graph(&self) -> &GraphConfiguration {
        &self.graph
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (loadpath/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("loadpath/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "loadpath", "loadpath") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use loadpath::DependencySet;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let file = write_config(
            r#"
            [graph]
            perfect_dependency_threshold = 1
            good_dependency_threshold = 3
            color_model = true
            counting_method = "direct_connected"
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.graph().perfect_dependency_threshold(), 1);
        assert_eq!(config.graph().good_dependency_threshold(), 3);
        assert!(config.graph().color_model());
        assert_eq!(config.graph().counting_method(), DependencySet::DirectConnected);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = write_config("");
        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.graph().perfect_dependency_threshold(), 2);
        assert_eq!(config.graph().good_dependency_threshold(), 5);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        let file = write_config(
            r#"
            [graph]
            perfect_dependency_threshold = 6
            good_dependency_threshold = 2
            "#,
        );

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let file = write_config("[layout]\nspacing = 3\n");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }
}
