use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "pubdate", version)]
#[command(about = "Rename periodical PDFs to title.YYYY-MM-DD.ext", long_about = None)]
pub struct Cli {
    /// Files to rename.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Perform the renames (as opposed to a dry run).
    #[arg(long)]
    pub live: bool,

    /// Read configuration from this file instead of the user config.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print each rename as a JSON line.
    #[arg(long)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
