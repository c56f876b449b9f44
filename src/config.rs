use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".reslintrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Module directories relative to the workspace root. Empty means
    /// auto-discover: every direct subdirectory containing a resource root,
    /// plus the workspace itself when it has one.
    #[serde(default)]
    pub modules: Vec<String>,
    /// Name of the resource directory inside each module.
    #[serde(default = "default_resource_root")]
    pub resource_root: String,
    /// Glob patterns of workspace-relative paths to skip entirely.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_resource_root() -> String {
    "res".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
            resource_root: default_resource_root(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Loads `.reslintrc.json` from the workspace root. A missing file is
    /// not an error; the defaults apply.
    pub fn load(workspace: &Path) -> Result<Self> {
        let path: PathBuf = workspace.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.ignores
            .iter()
            .filter_map(|pattern| Pattern::new(pattern).ok())
            .any(|pattern| pattern.matches(relative_path))
    }
}

/// Default config serialized for `reslint init`.
pub fn default_config_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&Config::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.modules.is_empty());
        assert_eq!(config.resource_root, "res");
    }

    #[test]
    fn partial_config_files_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "modules": ["app", "lib"] }"#,
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.modules, vec!["app", "lib"]);
        assert_eq!(config.resource_root, "res");
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn ignores_match_relative_paths() {
        let config = Config {
            ignores: vec!["**/generated/**".to_string(), "app/res/values/legacy.xml".to_string()],
            ..Config::default()
        };
        assert!(config.is_ignored("lib/res/generated/values/colors.xml"));
        assert!(config.is_ignored("app/res/values/legacy.xml"));
        assert!(!config.is_ignored("app/res/values/colors.xml"));
    }

    #[test]
    fn default_config_round_trips() {
        let json = default_config_json().unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.resource_root, "res");
    }
}
