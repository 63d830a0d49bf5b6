//! Like counter

use serde::Serialize;
use std::fmt;

/// Applause counter of one rendered comment. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LikeCount(u64);

impl LikeCount {
    /// A fresh counter at zero
    pub fn new() -> Self {
        Self(0)
    }

    /// Add one like
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Current count
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LikeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(LikeCount::new().get(), 0);
    }

    #[test]
    fn test_increment_n_times() {
        let mut likes = LikeCount::new();
        for _ in 0..5 {
            likes.increment();
        }
        assert_eq!(likes.get(), 5);
        assert_eq!(likes.to_string(), "5");
    }

    #[test]
    fn test_saturates() {
        let mut likes = LikeCount(u64::MAX);
        likes.increment();
        assert_eq!(likes.get(), u64::MAX);
    }
}
