//! Identifier types shared across the comment subsystem.
//!
//! This module contains the small value types the rest of the crate is
//! built on:
//! - `CommentId`: unique identifier of a comment within a topic
//! - `TopicId`: identifier of a discussion topic
//!
//! Both are plain integer newtypes; comment identity is assigned by the
//! persistence layer, not derived from content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a comment within a topic.
///
/// Identifiers are positive integers assigned by the persistence layer.
/// The external wire convention uses `0` as a sentinel meaning "replies to
/// the topic itself"; [`CommentId::from_raw`] decodes that convention into
/// `Option<CommentId>` at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(u32);

impl CommentId {
    /// Creates a comment identifier from a known-positive value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Decodes a raw identifier from the external convention where `0`
    /// means "no comment" (a reply to the topic itself).
    pub fn from_raw(raw: u32) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Returns the underlying integer value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a discussion topic.
///
/// Used as the key of the per-topic comment-list cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopicId(u32);

impl TopicId {
    /// Creates a topic identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying integer value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the current timestamp in milliseconds since the Unix epoch.
///
/// Topic last-modification timestamps use this convention.
pub fn current_timestamp_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
