use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    let path = Config::path()?;
    match command {
        ConfigCommands::Show => show(&path),
        ConfigCommands::Set { key, value } => set(&path, &key, &value),
    }
}

fn show(path: &Path) -> Result<()> {
    let config = Config::load_if_present_from(path)?;

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!(
        "  defaults.theme     {}",
        config.theme().unwrap_or("dark (default)")
    );
    println!("  defaults.windowed  {}", config.windowed());
    Ok(())
}

fn set(path: &Path, key: &str, value: &str) -> Result<()> {
    update(path, key, value)?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display().to_string().dimmed()
    );
    Ok(())
}

/// Apply one `key = value` to the file at `path`, keeping every other key.
/// Nothing is written if the file cannot be parsed or the value is invalid.
fn update(path: &Path, key: &str, value: &str) -> Result<Config> {
    let mut config = Config::load_if_present_from(path)?;
    config.set(key, value)?;
    config.save_to(path)?;
    Ok(config)
}
