use crate::catalog::AppEntry;
use crate::config::{PLACEHOLDER_ICON_URL, StoreConfig};
use crate::error::Result;
use colored::Colorize;
use jiff::Zoned;
use std::io::{self, BufRead, Write};
use uuid::Uuid;

/// Raw field values collected for a new entry, before defaulting.
///
/// Kept separate from the prompt loop so the defaulting and URL
/// construction rules can be exercised without a terminal.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub name: String,
    pub version: String,
    pub category: String,
    pub description: String,
    pub file_name: String,
    pub icon_name: String,
}

impl EntryDraft {
    /// Build the final catalog record: generate the id and timestamp, apply
    /// the configured fallbacks to blank fields, and construct the relative
    /// asset paths.
    pub fn into_entry(self, config: &StoreConfig) -> AppEntry {
        let icon_name = self.icon_name.trim();
        let icon_url = if icon_name.is_empty() {
            PLACEHOLDER_ICON_URL.to_string()
        } else {
            config.icon_url(icon_name)
        };

        AppEntry {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            version: fallback(&self.version, config.default_version),
            category: fallback(&self.category, config.default_category),
            description: self.description.trim().to_string(),
            download_url: config.download_url(self.file_name.trim()),
            icon_url,
            date: Zoned::now().datetime().to_string(),
        }
    }
}

fn fallback(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Collects the fields of a new entry from the user.
pub struct IntakeAgent<'a> {
    config: &'a StoreConfig,
}

impl<'a> IntakeAgent<'a> {
    pub fn new(config: &'a StoreConfig) -> Self {
        Self { config }
    }

    /// Prompt for every field on stdin. Returns `None` when the required
    /// name is left blank, in which case the add is abandoned without
    /// touching the catalog.
    pub fn collect(&self) -> Result<Option<EntryDraft>> {
        self.collect_from(&mut io::stdin().lock())
    }

    pub fn collect_from<R: BufRead>(&self, input: &mut R) -> Result<Option<EntryDraft>> {
        let name = prompt(input, "App Name", None)?;
        if name.is_empty() {
            return Ok(None);
        }

        let version = prompt(input, "Version", Some(self.config.default_version))?;
        let category = prompt(input, "Category", Some(self.config.default_category))?;
        let description = prompt(input, "Description", None)?;

        println!(
            "\nEnsure your app file is in '{}'.",
            self.config.downloads_dir.display()
        );
        println!(
            "Ensure your icon is in '{}' (optional).",
            self.config.icons_dir.display()
        );

        let file_name = prompt(input, "Filename (e.g. app.zip)", None)?;
        let download_path = self.config.downloads_dir.join(&file_name);
        if !download_path.exists() {
            println!(
                "{}",
                format!(
                    "Warning: '{}' not found locally. Continuing anyway...",
                    download_path.display()
                )
                .yellow()
            );
        }

        let icon_name = prompt(input, "Icon Filename (e.g. icon.png)", None)?;

        Ok(Some(EntryDraft {
            name,
            version,
            category,
            description,
            file_name,
            icon_name,
        }))
    }
}

/// Read one line with a printed prompt. The bracketed default is display
/// only; blank input comes back as an empty string and defaulting happens
/// in `into_entry`.
fn prompt<R: BufRead>(input: &mut R, label: &str, default: Option<&str>) -> Result<String> {
    match default {
        Some(d) => print!("{} [{}]: ", label.bold(), d.dimmed()),
        None => print!("{}: ", label.bold()),
    }
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask a yes/no question. Blank input takes the default; anything else
/// re-prompts until the answer is recognizable.
pub fn confirm<R: BufRead>(input: &mut R, question: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    loop {
        print!("{} {} ", question.bold(), hint);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default_yes);
        }

        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", "Please answer with y(es) or n(o).".red()),
        }
    }
}
