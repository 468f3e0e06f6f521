//! Transient notice banner state
//!
//! The TUI equivalent of the original tool's blocking alerts: a one-line
//! banner shown until it expires or the next notice replaces it.

use std::time::{Duration, Instant};

/// How long a notice stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    shown_at: Instant,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    /// Whether this notice has outlived its time-to-live
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTICE_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_notice_is_not_expired() {
        assert!(!Notice::info("saved").is_expired());
        assert!(!Notice::error("failed").is_expired());
    }

    #[test]
    fn test_levels() {
        assert_eq!(Notice::info("x").level, NoticeLevel::Info);
        assert_eq!(Notice::error("x").level, NoticeLevel::Error);
    }
}
