use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use types::RoleKind;

use crate::TrackerError;

pub const DEFAULT_CONFIG_PATH: &str = "avalon.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub database_url: Option<String>,
    pub default_optional_roles: Vec<RoleKind>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            default_optional_roles: vec![RoleKind::Percival, RoleKind::Morgana],
        }
    }
}

impl TrackerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TrackerError> {
        serde_yaml::from_str(yaml).map_err(|e| TrackerError::Config(e.to_string()))
    }

    pub fn load(path: Option<&Path>) -> Result<Self, TrackerError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    log::debug!("No {DEFAULT_CONFIG_PATH}, using default config");
                    return Ok(Self::default());
                }
                default
            }
        };
        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| TrackerError::Config(format!("{}: {e}", path.display())))?;
        log::info!("Loaded config from {}", path.display());
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TrackerConfig::from_yaml_str(
            "database_url: sqlite://scores.db\ndefault_optional_roles: [Percival, Oberon]\n",
        )
        .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("sqlite://scores.db"));
        assert_eq!(
            config.default_optional_roles,
            vec![RoleKind::Percival, RoleKind::Oberon]
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = TrackerConfig::from_yaml_str("database_url: \"sqlite::memory:\"\n").unwrap();
        assert_eq!(
            config.default_optional_roles,
            vec![RoleKind::Percival, RoleKind::Morgana]
        );
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(matches!(
            TrackerConfig::from_yaml_str("default_optional_roles: [Jester]\n"),
            Err(TrackerError::Config(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = TrackerConfig::load(Some(Path::new("/nonexistent/avalon.yaml")));
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }
}
