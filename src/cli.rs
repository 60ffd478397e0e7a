use clap::Parser;
use std::path::PathBuf;

/// Reads `git status --porcelain=v2 --branch` and prints a summary.
#[derive(Default, Debug, Parser)]
#[command(name = crate::APP_NAME)]
#[command(version)]
pub struct Args {
    /// Read status from this file instead of stdin
    #[clap(long)]
    pub input: Option<PathBuf>,
    /// Repository root, used to resolve file paths. Defaults to the current directory
    #[clap(long)]
    pub repo: Option<PathBuf>,
    /// List every changed file
    #[clap(long, action)]
    pub files: bool,
    /// Write summaries as sentences instead of symbols
    #[clap(long, action)]
    pub expand: bool,
    /// Printed before each non-empty summary
    #[clap(long)]
    pub prefix: Option<String>,
    /// Printed between the parts of a summary
    #[clap(long)]
    pub separator: Option<String>,
    /// Printed instead of a summary when there is nothing to report
    #[clap(long)]
    pub empty: Option<String>,
    /// Enable logging to 'repostat.log'
    #[clap(long, action)]
    pub log: bool,
}
