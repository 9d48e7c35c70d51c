use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use gitinfo_core::{Generator, Language};

use super::VcsArgs;

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Directory to generate sources into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Fully-qualified type name, e.g. com.example.GitInfo
    #[arg(short, long)]
    pub class_name: Option<String>,
    /// Language of the generated file: java or rust
    #[arg(short, long)]
    pub language: Option<Language>,
    /// Text written when a value could not be determined
    #[arg(long)]
    pub absent_placeholder: Option<String>,
    #[command(flatten)]
    pub vcs: VcsArgs,
}

pub fn run(cmd: &GenerateCommand) -> anyhow::Result<()> {
    let config = cmd.vcs.resolve()?;

    let output_dir = cmd
        .output_dir
        .clone()
        .or_else(|| config.output_directory.clone())
        .context("no output directory: pass --output-dir or set output_directory in gitinfo.toml")?;
    let class_name = cmd
        .class_name
        .clone()
        .or_else(|| config.class_name.clone())
        .context("no class name: pass --class-name or set class_name in gitinfo.toml")?;

    let generator = Generator::new(output_dir, class_name)
        .language(cmd.language.unwrap_or(config.language))
        .vcs(config.vcs.clone())
        .absent_placeholder(
            cmd.absent_placeholder
                .clone()
                .unwrap_or_else(|| config.absent_placeholder.clone()),
        )
        .pinned(super::pinned(&config));

    let path = generator
        .run(&super::runner(&config))
        .context("generating git info source")?;
    println!("Generated {}", path.display());
    Ok(())
}
