use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emitter::DEFAULT_ABSENT_PLACEHOLDER;
use crate::errors::{GitInfoError, Result};
use crate::language::Language;
use crate::vcs::DEFAULT_VCS;

pub const CONFIG_FILE: &str = "gitinfo.toml";

/// Contents of `gitinfo.toml`. Relative paths are resolved against the
/// directory holding the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitInfoConfig {
    #[serde(default)]
    pub output_directory: Option<PathBuf>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_vcs")]
    pub vcs: String,
    /// Working directory for the VCS commands.
    #[serde(default)]
    pub repo: Option<PathBuf>,
    #[serde(default = "default_absent_placeholder")]
    pub absent_placeholder: String,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

fn default_vcs() -> String {
    DEFAULT_VCS.into()
}

fn default_absent_placeholder() -> String {
    DEFAULT_ABSENT_PLACEHOLDER.into()
}

impl Default for GitInfoConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            class_name: None,
            language: Language::default(),
            vcs: default_vcs(),
            repo: None,
            absent_placeholder: default_absent_placeholder(),
            sha: None,
            branch: None,
        }
    }
}

/// Walk up from `start` looking for `gitinfo.toml`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and parse a config file.
pub fn load_config(path: &Path) -> Result<GitInfoConfig> {
    if !path.exists() {
        return Err(GitInfoError::ConfigNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let mut config: GitInfoConfig =
        toml::from_str(&content).map_err(|e| GitInfoError::ConfigParse(e.to_string()))?;

    if let Some(base) = path.parent() {
        config.output_directory = config.output_directory.map(|p| base.join(p));
        config.repo = config.repo.map(|p| base.join(p));
    }
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
output_directory = "build/generated"
class_name = "com.example.GitInfo"
language = "rust"
vcs = "/usr/local/bin/git"
absent_placeholder = "unknown"
sha = "0000000"
"#;
        let config: GitInfoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.class_name.as_deref(), Some("com.example.GitInfo"));
        assert_eq!(config.language, Language::Rust);
        assert_eq!(config.vcs, "/usr/local/bin/git");
        assert_eq!(config.absent_placeholder, "unknown");
        assert_eq!(config.sha.as_deref(), Some("0000000"));
        assert!(config.branch.is_none());
    }

    #[test]
    fn config_defaults() {
        let config: GitInfoConfig = toml::from_str(r#"class_name = "a.B""#).unwrap();
        assert_eq!(config.language, Language::Java);
        assert_eq!(config.vcs, "git");
        assert_eq!(config.absent_placeholder, "null");
        assert_eq!(
            GitInfoConfig {
                class_name: Some("a.B".into()),
                ..GitInfoConfig::default()
            },
            config
        );
    }

    #[test]
    fn unknown_language_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"language = "cobol""#).unwrap();
        assert!(matches!(
            load_config(&path).unwrap_err(),
            GitInfoError::ConfigParse(_)
        ));
    }

    #[test]
    fn load_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "output_directory = \"gen\"\nrepo = \".\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output_directory, Some(dir.path().join("gen")));
        assert_eq!(config.repo, Some(dir.path().join(".")));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_config(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, GitInfoError::ConfigNotFound(_)));
    }

    #[test]
    fn find_config_walks_up() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "class_name = \"a.B\"").unwrap();

        let nested = dir.path().join("some").join("nested").join("dir");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
    }

    #[test]
    fn find_config_returns_none_when_missing() {
        let dir = tempdir().unwrap();
        assert!(find_config(dir.path()).is_none());
    }
}
