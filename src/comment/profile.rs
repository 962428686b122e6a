//! Per-user display settings consumed by the pagination operations.

use crate::error::{CommentError, Result};
use serde::{Deserialize, Serialize};

/// Default number of messages per display page.
pub const DEFAULT_MESSAGES_PER_PAGE: usize = 50;

/// Display settings that shape paginated comment rendering.
///
/// Supplied by an external profile store; validated at construction so the
/// pagination arithmetic never sees a zero page size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayProfile {
    messages_per_page: usize,
    newest_first: bool,
}

impl DisplayProfile {
    /// Creates a display profile.
    ///
    /// # Errors
    /// Returns an error if `messages_per_page` is zero.
    pub fn new(messages_per_page: usize, newest_first: bool) -> Result<Self> {
        if messages_per_page == 0 {
            return Err(CommentError::validation(
                "messages per page must be positive",
            ));
        }

        Ok(Self {
            messages_per_page,
            newest_first,
        })
    }

    /// Number of comments shown per display page.
    pub fn messages_per_page(&self) -> usize {
        self.messages_per_page
    }

    /// Returns true if the profile displays newest comments first.
    pub fn newest_first(&self) -> bool {
        self.newest_first
    }
}

impl Default for DisplayProfile {
    fn default() -> Self {
        Self {
            messages_per_page: DEFAULT_MESSAGES_PER_PAGE,
            newest_first: false,
        }
    }
}
