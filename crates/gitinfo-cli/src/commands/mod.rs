pub mod generate;
pub mod show;

use std::path::PathBuf;

use clap::Args;
use gitinfo_core::config::GitInfoConfig;
use gitinfo_core::SystemRunner;

/// Options shared by every command that queries the VCS.
#[derive(Debug, Args)]
pub struct VcsArgs {
    /// Config file (default: nearest gitinfo.toml above the current dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// VCS executable to run (default: git)
    #[arg(long)]
    pub vcs: Option<String>,
    /// Directory to run the VCS in (default: current dir)
    #[arg(long)]
    pub repo: Option<PathBuf>,
    /// Use this commit id instead of querying (env: GITINFO_SHA)
    #[arg(long)]
    pub sha: Option<String>,
    /// Use this branch name instead of querying (env: GITINFO_BRANCH)
    #[arg(long)]
    pub branch: Option<String>,
}

impl VcsArgs {
    /// Fold flags over the loaded config.
    pub fn resolve(&self) -> anyhow::Result<GitInfoConfig> {
        let mut config = crate::settings::load(self.config.as_deref())?;
        if let Some(vcs) = &self.vcs {
            config.vcs = vcs.clone();
        }
        if let Some(repo) = &self.repo {
            config.repo = Some(repo.clone());
        }
        let pinned = crate::settings::pinned(
            self.sha.as_deref(),
            self.branch.as_deref(),
            &config,
            crate::settings::process_env,
        );
        config.sha = pinned.sha;
        config.branch = pinned.branch;
        Ok(config)
    }
}

pub fn runner(config: &GitInfoConfig) -> SystemRunner {
    match &config.repo {
        Some(dir) => SystemRunner::in_dir(dir),
        None => SystemRunner::new(),
    }
}

pub fn pinned(config: &GitInfoConfig) -> gitinfo_core::Pinned {
    gitinfo_core::Pinned {
        sha: config.sha.clone(),
        branch: config.branch.clone(),
    }
}
