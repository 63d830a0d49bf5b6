//! Draft validation

use crate::error::{FeedError, Result};

/// Message shown when a submission is attempted with an empty draft
pub const REQUIRED_MESSAGE: &str = "Esté campo é obrigatório!";

/// Validator for comment drafts
///
/// The only rule is that the text is required; any non-empty string,
/// whitespace included, is accepted.
#[derive(Debug, Clone)]
pub struct DraftValidator {
    required_message: String,
}

impl DraftValidator {
    /// Create a new validator with the default message
    pub fn new() -> Self {
        Self {
            required_message: REQUIRED_MESSAGE.to_string(),
        }
    }

    /// Create a validator with a custom required-field message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            required_message: message.into(),
        }
    }

    /// Validate draft text
    pub fn validate(&self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(FeedError::Validation(self.required_message.clone()));
        }
        Ok(())
    }

    /// The message reported for a missing comment
    pub fn required_message(&self) -> &str {
        &self.required_message
    }
}

impl Default for DraftValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content_valid() {
        let validator = DraftValidator::new();
        assert!(validator.validate("Valid comment").is_ok());
        assert!(validator.validate("   ").is_ok());
    }

    #[test]
    fn test_validate_content_empty() {
        let validator = DraftValidator::new();
        let err = validator.validate("").unwrap_err();
        assert_eq!(err.to_string(), format!("Validation error: {}", REQUIRED_MESSAGE));
    }

    #[test]
    fn test_custom_message() {
        let validator = DraftValidator::with_message("This field is required");
        assert_eq!(validator.required_message(), "This field is required");
    }
}
