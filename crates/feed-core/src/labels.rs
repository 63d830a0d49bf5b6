//! Fixed interface text shared by the TUI and the exporters

/// Heading above the comment form
pub const FEEDBACK_HEADING: &str = "Deixe seu feedback";

/// Placeholder of the empty comment field
pub const COMMENT_PLACEHOLDER: &str = "Deixe um comentário...";

/// Publish button
pub const PUBLISH: &str = "Publicar";

/// Like button
pub const APPLAUD: &str = "Aplaudir";

/// Delete button tooltip
pub const DELETE_COMMENT: &str = "Deletar comentário";
