//! Feed container and feed sources

pub mod container;
pub mod loader;
pub mod seed;

pub use container::Feed;
pub use loader::{FeedFile, FeedFormat, FeedLoader};
pub use seed::demo_posts;
