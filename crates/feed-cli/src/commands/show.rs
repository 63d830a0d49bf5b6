//! Show command
//!
//! Render the feed as HTML, Markdown or JSON without opening the terminal UI.

use super::{load_feed, OutputFormat};
use anyhow::{bail, Context, Result};
use clap::Args;
use feed_core::config::Config;
use feed_core::export::{ExportManager, ExportOptions};
use feed_core::feed::Feed;
use feed_core::view::Submission;
use feed_core::PostId;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Feed file (JSON or TOML); defaults to the configured feed or the demo posts
    #[arg(long, short)]
    pub feed: Option<PathBuf>,

    /// Output format (defaults to export.default_format)
    #[arg(long, short = 'F', value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Publish a comment before rendering (repeatable)
    #[arg(long = "comment", value_name = "TEXT")]
    pub comments: Vec<String>,

    /// Post that receives --comment (default: the first post)
    #[arg(long)]
    pub post: Option<PostId>,
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let format = OutputFormat::resolve(args.format, config)?;
    let mut feed = load_feed(args.feed.as_deref(), config)?;

    if !args.comments.is_empty() {
        publish_comments(&mut feed, args.post, &args.comments)?;
    }

    let manager = ExportManager::with_options(ExportOptions::from_config(config));

    match args.output {
        Some(path) => {
            manager
                .export_to_file(&feed, format.name(), &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Wrote {}", "✓".green(), path.display());
        }
        None => {
            let content = manager.export(&feed, format.name())?;
            println!("{}", content);
        }
    }

    Ok(())
}

fn publish_comments(feed: &mut Feed, post: Option<PostId>, comments: &[String]) -> Result<()> {
    let view = match post {
        Some(id) => feed.post_mut(id)?,
        None => match feed.at_mut(0) {
            Some(view) => view,
            None => bail!("Feed has no posts to comment on"),
        },
    };

    for text in comments {
        view.update_draft(text.as_str());
        if let Submission::Rejected { message } = view.submit_comment() {
            bail!("Comment rejected: {}", message);
        }
    }

    tracing::info!(post = %view.id(), count = comments.len(), "published comments");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::comment::SEED_COMMENT;

    fn demo_feed() -> Feed {
        crate::commands::load_feed(None, &Config::default()).unwrap()
    }

    #[test]
    fn test_publish_to_first_post() {
        let mut feed = demo_feed();
        publish_comments(&mut feed, None, &["Ótimo!".to_string()]).unwrap();

        let first = feed.at(0).unwrap();
        assert_eq!(first.comments().as_slice(), [SEED_COMMENT, "Ótimo!"]);
        assert!(first.draft().is_empty());
        assert_eq!(feed.at(1).unwrap().comments().len(), 1);
    }

    #[test]
    fn test_publish_to_chosen_post() {
        let mut feed = demo_feed();
        publish_comments(&mut feed, Some(PostId(2)), &["a".to_string(), "b".to_string()])
            .unwrap();

        assert_eq!(feed.get(PostId(2)).unwrap().comments().len(), 3);
        assert_eq!(feed.get(PostId(1)).unwrap().comments().len(), 1);
    }

    #[test]
    fn test_empty_comment_is_rejected() {
        let mut feed = demo_feed();
        let err = publish_comments(&mut feed, None, &[String::new()]).unwrap_err();
        assert!(err.to_string().contains("Esté campo é obrigatório!"));
    }

    #[test]
    fn test_unknown_post() {
        let mut feed = demo_feed();
        assert!(publish_comments(&mut feed, Some(PostId(99)), &["x".to_string()]).is_err());
    }
}
