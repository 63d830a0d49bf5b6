//! Post module
//!
//! Posts are immutable once built: author metadata, publish time and an
//! ordered body of content lines.

pub mod model;
pub mod builder;

pub use model::*;
pub use builder::PostBuilder;
