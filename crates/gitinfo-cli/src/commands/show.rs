use anyhow::Context;
use clap::Args;
use gitinfo_core::vcs;

use super::VcsArgs;

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub vcs: VcsArgs,
}

pub fn run(cmd: &ShowCommand) -> anyhow::Result<()> {
    let config = cmd.vcs.resolve()?;
    let info = vcs::resolve(&super::runner(&config), &config.vcs, &super::pinned(&config))
        .context("querying version control")?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("sha:    {}", info.sha.as_deref().unwrap_or("(unavailable)"));
        println!("branch: {}", info.branch.as_deref().unwrap_or("(unavailable)"));
    }
    Ok(())
}
