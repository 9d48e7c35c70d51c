mod commands;
mod settings;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// gitinfo — embed the current commit and branch in generated source
#[derive(Debug, Parser)]
#[command(name = "gitinfo", version, about, long_about = "\
gitinfo — embed the current commit and branch in generated source

Quick reference:
  gitinfo generate -o <DIR> -c <CLASS>   Write <DIR>/<package path>/<Class>.java
  gitinfo generate -l rust ...           Write a Rust module instead
  gitinfo show [--json]                  Print the resolved commit and branch

Settings are read from the nearest gitinfo.toml unless overridden by flags.

Environment variables:
  GITINFO_SHA      Use this commit id instead of querying the VCS
  GITINFO_BRANCH   Use this branch name instead of querying the VCS
  RUST_LOG         Log filter (default: info)
")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the source file with SHA and BRANCH constants
    Generate(commands::generate::GenerateCommand),

    /// Print the commit id and branch name without writing anything
    Show(commands::show::ShowCommand),

    /// Show version and build info
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match &cli.command {
        Command::Generate(cmd) => commands::generate::run(cmd),
        Command::Show(cmd) => commands::show::run(cmd),
        Command::Version => {
            println!(
                "gitinfo {} ({} on {})",
                gitinfo_core::version(),
                env!("GITINFO_BUILD_SHA"),
                env!("GITINFO_BUILD_BRANCH")
            );
            Ok(())
        }
        Command::Completions { shell } => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "gitinfo",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
