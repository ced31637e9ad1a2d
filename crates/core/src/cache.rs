// crates/core/src/cache.rs
//! Analysis result cache keyed by content hash.

use std::collections::HashMap;
use std::sync::RwLock;

use sha2::{Digest, Sha256};

use crate::types::{ContentAnalysis, ContentInput};

/// SHA-256 hex digest of the content type and content.
pub fn content_hash(input: &ContentInput) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.content_type.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(input.content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Cache key for an input. Layout headings carry the metadata title, so two
/// requests for the same content with different titles are cached apart.
pub fn cache_key(input: &ContentInput) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content_hash(input).as_bytes());
    if let Some(title) = &input.metadata.title {
        hasher.update([0u8]);
        hasher.update(title.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Storage for finished analyses.
pub trait AnalysisCache: Send + Sync {
    fn get(&self, hash: &str) -> Option<ContentAnalysis>;

    /// Store an analysis, replacing any previous entry for `hash`.
    fn put(&self, hash: &str, analysis: ContentAnalysis);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local cache. Entries live until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryAnalysisCache {
    entries: RwLock<HashMap<String, ContentAnalysis>>,
}

impl InMemoryAnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalysisCache for InMemoryAnalysisCache {
    fn get(&self, hash: &str) -> Option<ContentAnalysis> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(hash).cloned()
    }

    fn put(&self, hash: &str, analysis: ContentAnalysis) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(hash.to_string(), analysis);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
