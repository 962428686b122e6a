//! Per-topic caching of built comment lists.
//!
//! A topic's [`CommentList`] is expensive enough to build that callers keep
//! one instance per topic and reuse it across requests. Because the list is
//! immutable, the cache hands out `Arc` snapshots: a reader keeps consistent
//! data for as long as it holds the `Arc`, and a replacement after a new
//! comment arrives never disturbs in-flight readers. Updating a topic means
//! building a fresh list and swapping it in — the map entry is replaced,
//! never the list's fields.

use crate::comment::list::CommentList;
use crate::comment::types::TopicId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Cache of one built [`CommentList`] per topic.
#[derive(Debug, Default)]
pub struct TopicCache {
    lists: RwLock<HashMap<TopicId, Arc<CommentList>>>,
}

impl TopicCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached list for a topic, if any.
    pub fn get(&self, topic: TopicId) -> Option<Arc<CommentList>> {
        self.lists.read().unwrap().get(&topic).cloned()
    }

    /// Installs a freshly built list for a topic, replacing any previous
    /// one, and returns the shared handle.
    ///
    /// Readers holding an `Arc` to the previous list continue to see that
    /// snapshot; only subsequent `get` calls observe the replacement.
    pub fn replace(&self, topic: TopicId, list: CommentList) -> Arc<CommentList> {
        let list = Arc::new(list);
        self.lists.write().unwrap().insert(topic, Arc::clone(&list));

        debug!(%topic, comments = list.comments().len(), "replaced cached comment list");

        list
    }

    /// Drops the cached list for a topic, if any.
    pub fn invalidate(&self, topic: TopicId) {
        self.lists.write().unwrap().remove(&topic);
    }

    /// Number of topics currently cached.
    pub fn len(&self) -> usize {
        self.lists.read().unwrap().len()
    }

    /// Returns true if no topic is cached.
    pub fn is_empty(&self) -> bool {
        self.lists.read().unwrap().is_empty()
    }
}
