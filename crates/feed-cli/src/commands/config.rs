//! Config command
//!
//! Manage feed configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use feed_core::config::Config;
use std::path::{Path, PathBuf};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file in use
    Path,

    /// Reset to default configuration
    Reset {
        /// Force reset without confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, explicit: Option<&Path>, cwd: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(explicit, cwd, json),
        ConfigCommand::Path => print_path(explicit, cwd),
        ConfigCommand::Reset { force } => reset_config(explicit, cwd, force),
    }
}

/// The file `reset` writes: the explicit path, else the project-local file
fn target_path(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Config::local_path(cwd))
}

fn show_config(explicit: Option<&Path>, cwd: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = Config::load(explicit, cwd).context("Failed to load configuration")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    match Config::locate(explicit, cwd) {
        Some(path) => println!("{}", path.display().to_string().dimmed()),
        None => println!("{}", "(built-in defaults)".dimmed()),
    }
    println!();
    println!("{}", config.to_toml()?);

    Ok(())
}

fn print_path(explicit: Option<&Path>, cwd: &Path) -> Result<()> {
    use colored::Colorize;

    match Config::locate(explicit, cwd) {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!(
                "{} No configuration file found. Run '{}' to create one.",
                "⚠".yellow(),
                "feed init".cyan()
            );
            println!("{}", target_path(explicit, cwd).display());
        }
    }
    Ok(())
}

fn reset_config(explicit: Option<&Path>, cwd: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    let config_path = target_path(explicit, cwd);

    if !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    Config::default()
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Configuration reset to defaults: {}",
        "✓".green(),
        config_path.display()
    );
    Ok(())
}
