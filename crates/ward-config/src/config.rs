//! Configuration types and loading.
//!
//! [`WardConfig`] represents the contents of `.ward/config.yaml`. A
//! missing config file loads as the defaults, so a ward initialized with
//! nothing but an empty `.ward/` directory still works.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// The `.ward/` directory was not found.
    #[error("no .ward directory found (run 'ward init' first)")]
    WardDirNotFound,
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The name of the config file inside `.ward/`.
const CONFIG_FILE: &str = "config.yaml";

/// What a logged-in user is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ward staff: full access, including mutations.
    #[default]
    Staff,
    /// Patient: read-only access.
    Patient,
}

impl Role {
    /// Returns `true` if this role may run mutating commands.
    pub fn can_mutate(&self) -> bool {
        matches!(self, Self::Staff)
    }
}

/// One entry in the credential table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    /// Plain-text password. This is a single-operator tool on a trusted
    /// machine, not an authentication system.
    pub password: String,
    /// The role granted on login.
    #[serde(default)]
    pub role: Role,
}

/// The contents of `.ward/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardConfig {
    /// Display name of the ward.
    #[serde(default = "default_ward_name")]
    pub ward: String,

    /// Name of the bed file inside `.ward/`.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Credential table keyed by user name. When empty, every user
    /// resolves to a staff session.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub users: BTreeMap<String, UserEntry>,
}

impl Default for WardConfig {
    fn default() -> Self {
        Self {
            ward: default_ward_name(),
            data_file: default_data_file(),
            users: BTreeMap::new(),
        }
    }
}

fn default_ward_name() -> String {
    "ward".to_string()
}

fn default_data_file() -> String {
    "beds.json".to_string()
}

impl WardConfig {
    /// Returns the full path of the bed file for a given `.ward/` directory.
    pub fn data_path(&self, ward_dir: &Path) -> PathBuf {
        ward_dir.join(&self.data_file)
    }
}

/// Loads the config from `ward_dir/config.yaml`.
///
/// A missing file yields the defaults.
pub fn load_config(ward_dir: &Path) -> Result<WardConfig> {
    let path = ward_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(WardConfig::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Saves the config to `ward_dir/config.yaml`.
pub fn save_config(ward_dir: &Path, config: &WardConfig) -> Result<()> {
    let path = ward_dir.join(CONFIG_FILE);
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = WardConfig::default();
        assert_eq!(config.ward, "ward");
        assert_eq!(config.data_file, "beds.json");
        assert!(config.users.is_empty());
    }

    #[test]
    fn missing_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config, WardConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = WardConfig {
            ward: "east-wing".into(),
            ..WardConfig::default()
        };
        config.users.insert(
            "nurse.silva".into(),
            UserEntry {
                password: "s3cret".into(),
                role: Role::Staff,
            },
        );
        save_config(dir.path(), &config).unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), config);
    }

    #[test]
    fn role_defaults_to_staff_in_yaml() {
        let yaml = "ward: east-wing\nusers:\n  ana:\n    password: pw\n";
        let config: WardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.users["ana"].role, Role::Staff);
    }

    #[test]
    fn patient_role_cannot_mutate() {
        assert!(Role::Staff.can_mutate());
        assert!(!Role::Patient.can_mutate());
    }

    #[test]
    fn data_path_joins_ward_dir() {
        let config = WardConfig::default();
        let path = config.data_path(Path::new("/tmp/.ward"));
        assert_eq!(path, Path::new("/tmp/.ward/beds.json"));
    }
}
