//! feed - browse a social feed and its comment threads from the terminal
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the built-in demo feed
//! feed view
//!
//! # Set up a project-local config and sample feed file
//! feed init
//!
//! # Print the feed as HTML with an extra comment on the first post
//! feed show --format html --comment "Ótimo!"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
