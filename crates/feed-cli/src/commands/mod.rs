//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod init;
pub mod show;
pub mod view;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use feed_core::config::Config;
use feed_core::feed::{demo_posts, Feed, FeedLoader};
use std::path::{Path, PathBuf};

/// feed - a social feed with inline comment threads
#[derive(Debug, Parser)]
#[command(name = "feed")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the feed in the terminal
    View(view::ViewArgs),

    /// Print the feed in a document format
    Show(show::ShowArgs),

    /// Create a project-local config and sample feed
    Init(init::InitArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Document formats for `show` and `view --export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML page
    Html,
    /// Markdown digest
    Markdown,
    /// Pretty JSON
    Json,
    /// Single-line JSON
    JsonCompact,
}

impl OutputFormat {
    /// Exporter name
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
            OutputFormat::JsonCompact => "json-compact",
        }
    }

    /// Resolve an explicit choice against the configured default
    pub fn resolve(explicit: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
        match explicit {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.export.default_format, true).map_err(|_| {
                anyhow::anyhow!(
                    "Unknown export.default_format '{}' in config",
                    config.export.default_format
                )
            }),
        }
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; the TUI owns the terminal unless asked
    if cli.verbose > 0 || !matches!(cli.command, Commands::View(_)) {
        setup_logging(cli.verbose);
    }

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    // Dispatch to command handler
    match cli.command {
        Commands::View(args) => view::execute(args, &load_config(cli.config.as_deref(), &cwd)?),
        Commands::Show(args) => show::execute(args, &load_config(cli.config.as_deref(), &cwd)?),
        Commands::Init(args) => init::execute(args, &cwd),
        Commands::Config(cmd) => config::execute(cmd, cli.config.as_deref(), &cwd),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    Config::load(explicit, cwd).context("Failed to load configuration")
}

/// Build the feed from `--feed`, then the configured path, then the demo posts
pub fn load_feed(feed_path: Option<&Path>, config: &Config) -> Result<Feed> {
    let path = match feed_path {
        Some(path) => Some(path.to_path_buf()),
        None => config.feed_path(),
    };
    let posts = match path {
        Some(path) => FeedLoader::load(&path)
            .with_context(|| format!("Failed to read feed {}", path.display()))?,
        None => {
            tracing::info!("no feed file given, using demo posts");
            demo_posts()?
        }
    };

    let feed = Feed::new(posts, &config.feed.seed_comment)?
        .with_required_message(&config.comments.required_message);
    Ok(feed)
}
