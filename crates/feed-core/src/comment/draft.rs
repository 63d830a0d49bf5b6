//! Pending comment text

/// In-progress comment text for one post, plus the validation message shown
/// after a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    validation: Option<String>,
}

impl Draft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text; any prior validation message is cleared
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.validation = None;
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if there is nothing to submit
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Take the text out, leaving the draft empty
    pub fn take(&mut self) -> String {
        self.validation = None;
        std::mem::take(&mut self.text)
    }

    /// Mark the draft as invalid
    pub fn flag(&mut self, message: impl Into<String>) {
        self.validation = Some(message.into());
    }

    /// Validation message, if the last submission was rejected
    pub fn validation(&self) -> Option<&str> {
        self.validation.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clears_validation() {
        let mut draft = Draft::new();
        draft.flag("required");
        assert_eq!(draft.validation(), Some("required"));

        draft.set("x");
        assert_eq!(draft.text(), "x");
        assert!(draft.validation().is_none());
    }

    #[test]
    fn test_take_empties() {
        let mut draft = Draft::new();
        draft.set("hello");
        assert_eq!(draft.take(), "hello");
        assert!(draft.is_empty());
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let mut draft = Draft::new();
        draft.set(" ");
        assert!(!draft.is_empty());
    }
}
