use std::path::Path;

use anyhow::Context;
use gitinfo_core::config::{find_config, load_config, GitInfoConfig};
use gitinfo_core::Pinned;

pub const SHA_ENV: &str = "GITINFO_SHA";
pub const BRANCH_ENV: &str = "GITINFO_BRANCH";

/// Load `--config`, or the nearest `gitinfo.toml` above the current
/// directory, or defaults when there is none.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<GitInfoConfig> {
    if let Some(path) = explicit {
        return load_config(path).with_context(|| format!("loading {}", path.display()));
    }
    let cwd = std::env::current_dir().context("reading current directory")?;
    match find_config(&cwd) {
        Some(path) => load_config(&path).with_context(|| format!("loading {}", path.display())),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(GitInfoConfig::default())
        }
    }
}

/// Pinned values: flags win over the environment, which wins over config.
pub fn pinned(
    sha_flag: Option<&str>,
    branch_flag: Option<&str>,
    config: &GitInfoConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Pinned {
    let pick = |flag: Option<&str>, var: &str, configured: &Option<String>| {
        flag.map(str::to_string)
            .or_else(|| env(var).filter(|v| !v.is_empty()))
            .or_else(|| configured.clone())
    };
    Pinned {
        sha: pick(sha_flag, SHA_ENV, &config.sha),
        branch: pick(branch_flag, BRANCH_ENV, &config.branch),
    }
}

pub fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GitInfoConfig {
        GitInfoConfig {
            sha: Some("from-config".into()),
            branch: Some("config-branch".into()),
            ..GitInfoConfig::default()
        }
    }

    #[test]
    fn flag_beats_env_and_config() {
        let env = |_: &str| Some("from-env".to_string());
        let p = pinned(Some("from-flag"), None, &config(), env);
        assert_eq!(p.sha.as_deref(), Some("from-flag"));
        assert_eq!(p.branch.as_deref(), Some("from-env"));
    }

    #[test]
    fn env_beats_config_unless_empty() {
        let env = |var: &str| match var {
            SHA_ENV => Some("from-env".to_string()),
            _ => Some(String::new()),
        };
        let p = pinned(None, None, &config(), env);
        assert_eq!(p.sha.as_deref(), Some("from-env"));
        assert_eq!(p.branch.as_deref(), Some("config-branch"));
    }

    #[test]
    fn nothing_pinned_by_default() {
        let p = pinned(None, None, &GitInfoConfig::default(), |_| None);
        assert_eq!(p, Pinned::default());
    }

    #[test]
    fn load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "class_name = \"a.B\"\nvcs = \"jj\"\n").unwrap();
        let config = load(Some(path.as_path())).unwrap();
        assert_eq!(config.class_name.as_deref(), Some("a.B"));
        assert_eq!(config.vcs, "jj");
    }

    #[test]
    fn load_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("missing.toml"), "{err:#}");
    }
}
