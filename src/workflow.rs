use crate::agents::{IntakeAgent, VersionControlAgent, intake};
use crate::catalog::{CatalogStore, LoadSource};
use crate::config::StoreConfig;
use crate::error::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Interactively collect and persist one new catalog entry, then offer to
/// push the change.
pub fn execute_add(config: &StoreConfig) -> Result<()> {
    println!("\n{}", "--- ADD NEW APP ---".cyan().bold());

    let intake_agent = IntakeAgent::new(config);
    let Some(draft) = intake_agent.collect()? else {
        println!(
            "{}",
            "App name is required; nothing was added.".yellow()
        );
        return Ok(());
    };

    let entry = draft.into_entry(config);
    let name = entry.name.clone();

    let store = CatalogStore::new(&config.catalog_file);
    let (mut entries, source) = store.load();
    warn_on_load(source, config);
    entries.push(entry);
    store.save(&entries)?;

    println!(
        "\n{}",
        format!("✓ Catalog updated ({} entries)", entries.len()).green()
    );

    let mut stdin = io::stdin().lock();
    if intake::confirm(&mut stdin, "\nPush to remote now?", true)? {
        run_sync(config, &format!("Add app: {name}"))?;
    }

    Ok(())
}

/// Display every catalog entry plus a summary count.
pub fn execute_list(config: &StoreConfig) -> Result<()> {
    println!("{}", "Listing catalog entries...".cyan().bold());

    let store = CatalogStore::new(&config.catalog_file);
    let (entries, source) = store.load();
    warn_on_load(source, config);

    if entries.is_empty() {
        println!("\n{}", "Catalog is empty".yellow());
        return Ok(());
    }

    println!();
    for entry in &entries {
        println!(
            "  • {} {} ({})",
            entry.name.white().bold(),
            entry.version.green(),
            entry.category.dimmed()
        );
        println!("    {}", entry.download_url.cyan());
        println!("    {} {}", entry.id.dimmed(), entry.date.dimmed());
    }

    println!(
        "\n{}",
        format!("{} app(s) in catalog", entries.len()).cyan().bold()
    );

    Ok(())
}

/// Stage, commit, and push the store checkout with the given message.
pub fn execute_sync(config: &StoreConfig, message: &str) -> Result<()> {
    run_sync(config, message)
}

/// The original interactive surface: a menu looping until Exit. Errors
/// from the chosen operation are printed and the menu continues; nothing
/// propagates past this loop.
pub fn execute_menu(config: &StoreConfig) -> Result<()> {
    loop {
        println!("\n{}", "=== STORE MANAGER ===".cyan().bold());
        println!("  1. Add New App");
        println!("  2. Sync/Push Changes");
        println!("  3. Exit");
        print!("{}", "Select: ".bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            // stdin closed
            return Ok(());
        }

        let result = match input.trim() {
            "1" => execute_add(config),
            "2" => execute_sync(config, "Manual sync"),
            "3" => return Ok(()),
            "" => continue,
            other => {
                println!("{}", format!("Unknown choice '{other}'").red());
                continue;
            }
        };

        if let Err(e) = result {
            println!("{} {}", "Error:".red().bold(), e);
        }
    }
}

fn run_sync(config: &StoreConfig, message: &str) -> Result<()> {
    println!("\n{}", "--- STORE SYNC ---".cyan().bold());

    let agent = VersionControlAgent::new(config.root())?;
    println!(
        "{}",
        "Pushing... (your git remote may ask for credentials)".dimmed()
    );
    let succeeded = agent.sync(message);

    if succeeded == 3 {
        println!("{}", "✓ Changes pushed to remote".green());
    } else {
        println!(
            "{}",
            format!("{succeeded}/3 sync steps succeeded").yellow()
        );
    }

    Ok(())
}

fn warn_on_load(source: LoadSource, config: &StoreConfig) {
    if source == LoadSource::Malformed {
        println!(
            "{}",
            format!(
                "Warning: '{}' could not be parsed; treating the catalog as empty",
                config.catalog_file.display()
            )
            .yellow()
        );
    }
}
