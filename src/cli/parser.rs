use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repo-cleaner")]
#[command(about = "Find and prune stale branches across GitHub repositories")]
#[command(
    version,
    long_about = "When run without any command, audits the repositories listed in the configured repository list"
)]
pub struct Cli {
    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use a specific configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report stale branches and optionally delete a selection of them
    Audit(AuditArgs),
    /// Inspect or initialize configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default, Clone)]
#[command(after_help = "SELECTION:
    Press Enter          skip deletion
    all                  delete every stale branch listed
    acme/docs:1, acme/site:2
                         delete branches by their number in the report

EXAMPLES:
    repo-cleaner audit
    repo-cleaner audit --repos repos.txt --years 2
    repo-cleaner audit --dry-run
    repo-cleaner audit --select 'acme/docs:1, acme/docs:3'")]
pub struct AuditArgs {
    /// File listing one owner/name per line
    #[arg(long, short = 'r', value_name = "FILE")]
    pub repos: Option<PathBuf>,

    /// Branches whose last commit is older than this many years are stale
    #[arg(long, short = 'y', value_name = "YEARS", value_parser = clap::value_parser!(u32).range(1..))]
    pub years: Option<u32>,

    /// Where to write the execution summary
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Selection to apply instead of prompting
    #[arg(long, short = 's', value_name = "SELECTION", conflicts_with = "dry_run")]
    pub select: Option<String>,

    /// Only report stale branches; never prompt or delete
    #[arg(long, help = "Only report stale branches; never prompt or delete")]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short)]
        force: bool,
    },
}
