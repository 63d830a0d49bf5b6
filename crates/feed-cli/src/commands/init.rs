//! Init command
//!
//! Create a project-local configuration and a sample feed file.

use anyhow::{Context, Result};
use clap::Args;
use feed_core::config::{Config, LOCAL_CONFIG_DIR};
use feed_core::feed::{demo_posts, FeedFormat, FeedLoader};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the sample feed written next to the config
pub const SAMPLE_FEED_NAME: &str = "posts.json";

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(long)]
    pub force: bool,

    /// Directory to initialize (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Execute the init command
pub fn execute(args: InitArgs, cwd: &Path) -> Result<()> {
    use colored::Colorize;

    let project_dir = args.path.map_or_else(|| cwd.to_path_buf(), |p| cwd.join(p));

    println!("Initializing feed in {}...", project_dir.display());

    let feed_dir = project_dir.join(LOCAL_CONFIG_DIR);
    if feed_dir.exists() && !args.force {
        eprintln!(
            "{} feed already initialized. Use --force to reinitialize.",
            "⚠".yellow()
        );
        return Ok(());
    }

    let written = write_project_files(&project_dir)?;
    for path in &written {
        println!("{} Created {}", "✓".green(), path.display());
    }

    println!();
    println!("Next steps:");
    println!("  1. Edit {} to add your own posts", written[1].display());
    println!("  2. Run '{}' to browse the feed", "feed view".cyan());

    Ok(())
}

/// Write `.feed/config.toml` and `.feed/posts.json`; returns both paths
fn write_project_files(project_dir: &Path) -> Result<[PathBuf; 2]> {
    let feed_dir = project_dir.join(LOCAL_CONFIG_DIR);
    fs::create_dir_all(&feed_dir)
        .with_context(|| format!("Failed to create {}", feed_dir.display()))?;

    let feed_path = feed_dir.join(SAMPLE_FEED_NAME);
    let posts = demo_posts()?;
    let content = FeedLoader::render(&posts, FeedFormat::Json)?;
    fs::write(&feed_path, content)
        .with_context(|| format!("Failed to write {}", feed_path.display()))?;

    let mut config = Config::default();
    config.feed.path = Some(Path::new(LOCAL_CONFIG_DIR).join(SAMPLE_FEED_NAME));
    let config_path = Config::local_path(project_dir);
    config
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!(dir = %project_dir.display(), "initialized feed project");
    Ok([config_path, feed_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_config_and_feed() {
        let dir = TempDir::new().unwrap();
        let [config_path, feed_path] = write_project_files(dir.path()).unwrap();

        assert!(config_path.ends_with(".feed/config.toml"));
        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(
            config.feed.path,
            Some(PathBuf::from(".feed").join("posts.json"))
        );

        let posts = FeedLoader::load(&feed_path).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_existing_project_is_kept() {
        let dir = TempDir::new().unwrap();
        let feed_dir = dir.path().join(LOCAL_CONFIG_DIR);
        fs::create_dir_all(&feed_dir).unwrap();

        execute(
            InitArgs {
                force: false,
                path: Some(dir.path().to_path_buf()),
            },
            dir.path(),
        )
        .unwrap();

        assert!(!feed_dir.join("config.toml").exists());
    }
}
