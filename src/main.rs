mod agents;
mod catalog;
mod cli;
mod config;
mod error;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use config::StoreConfig;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var("STOREMAN_VERBOSE", "1");
        }
    }

    let config = StoreConfig::new(&cli.path);

    if let Err(e) = config.ensure_layout() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }

    let result = match cli.command {
        Some(Commands::Add) => workflow::execute_add(&config),
        Some(Commands::List) => workflow::execute_list(&config),
        Some(Commands::Sync { message }) => workflow::execute_sync(&config, &message),
        None => workflow::execute_menu(&config),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
