// ABOUTME: Configuration types and parsing for kivotos.yml.
// ABOUTME: Handles YAML parsing, file discovery, and template scaffolding.

use crate::error::{Error, Result};
use crate::runtime::RuntimeConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "kivotos.yml";
pub const CONFIG_FILENAME_ALT: &str = "kivotos.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".kivotos/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory the backup document is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Explicit runtime override (type and/or socket path).
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            runtime: RuntimeConfig::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look for a config file in `dir`; fall back to defaults when none
    /// exists. Export works without a config file.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }
}

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, template_yaml())?;

    Ok(())
}

fn template_yaml() -> String {
    r#"# kivotos configuration
# Directory the backup document is written into.
output_dir: .

# Runtime override. Leave commented to auto-detect (Podman first, then Docker).
# runtime:
#   runtime: docker
#   socket: /var/run/docker.sock
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeType;

    #[test]
    fn parses_full_config() {
        let config = Config::from_yaml(
            r#"
output_dir: /var/backups
runtime:
  runtime: podman
  socket: /run/podman/podman.sock
"#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("/var/backups"));
        assert_eq!(config.runtime.runtime, Some(RuntimeType::Podman));
        assert_eq!(
            config.runtime.socket.as_deref(),
            Some("/run/podman/podman.sock")
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.runtime.runtime.is_none());
        assert!(config.runtime.socket.is_none());
    }

    #[test]
    fn template_parses_back() {
        let config = Config::from_yaml(&template_yaml()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn rejects_unknown_runtime_value() {
        let result = Config::from_yaml("runtime:\n  runtime: lxc\n");
        assert!(result.is_err());
    }
}
