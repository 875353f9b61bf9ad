use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "storeman",
    about = "Store Manager - maintain the downloadable-app catalog and push it to the store remote",
    version,
    author
)]
pub struct Cli {
    /// Path to the store repository root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// With no subcommand the interactive menu is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively add a new app entry to the catalog
    Add,

    /// List all entries in the catalog
    List,

    /// Stage, commit, and push catalog changes to the remote
    Sync {
        /// Commit message to use
        #[arg(short, long, default_value = "Manual sync")]
        message: String,
    },
}
