//! View command
//!
//! Browse the feed in the terminal UI.

use super::{load_feed, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use feed_core::config::Config;
use feed_core::export::{ExportManager, ExportOptions};
use feed_ui::{App, AppOptions};
use std::path::PathBuf;

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Feed file (JSON or TOML); defaults to the configured feed or the demo posts
    #[arg(long, short)]
    pub feed: Option<PathBuf>,

    /// Write the feed to this file after quitting
    #[arg(long, short)]
    pub export: Option<PathBuf>,

    /// Format for --export
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the view command
pub fn execute(args: ViewArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let format = OutputFormat::resolve(args.format, config)?;
    let feed = load_feed(args.feed.as_deref(), config)?;
    tracing::info!(posts = feed.len(), "starting feed view");

    let mut app = App::new(feed, AppOptions::from_config(config));
    app.run().context("Terminal UI failed")?;

    if let Some(path) = args.export {
        let feed = app.into_feed();
        let manager = ExportManager::with_options(ExportOptions::from_config(config));
        manager
            .export_to_file(&feed, format.name(), &path)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        println!(
            "{} Exported {} posts to {}",
            "✓".green(),
            feed.len(),
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Cli;
    use clap::Parser;

    #[test]
    fn test_view_args() {
        let cli = Cli::parse_from(["feed", "view", "--export", "out.html", "--format", "html"]);
        match cli.command {
            crate::commands::Commands::View(args) => {
                assert_eq!(args.export, Some(PathBuf::from("out.html")));
                assert_eq!(args.format, Some(OutputFormat::Html));
                assert!(args.feed.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
