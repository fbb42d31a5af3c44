//! Score memoization keyed by a content hash
//!
//! The key is the SHA-256 of the serialized record, graph and scoring config,
//! so any change to any input is a miss. Entries are evicted oldest-first
//! once `capacity` is reached.

use crate::config::ScoringConfig;
use crate::models::ContentRecord;
use crate::pipeline;
use crate::types::ScoreResult;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracing::debug;

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Hex SHA-256 over the scoring inputs
pub fn content_hash(record: &ContentRecord, graph: Option<&Value>, config: &ScoringConfig) -> String {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(record).unwrap_or_default());
    hasher.update([0u8]);
    hasher.update(graph.map(|g| g.to_string()).unwrap_or_default());
    hasher.update([0u8]);
    hasher.update(serde_json::to_vec(config).unwrap_or_default());
    hex::encode(hasher.finalize())
}

#[derive(Default)]
struct Entries {
    results: HashMap<String, ScoreResult>,
    order: VecDeque<String>,
}

/// Bounded score cache
pub struct ScoreCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl ScoreCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(Entries::default()),
        }
    }

    /// Cached result, or score and remember
    pub fn score(&self, record: &ContentRecord, graph: Option<&Value>, config: &ScoringConfig) -> ScoreResult {
        let key = content_hash(record, graph, config);

        if let Some(hit) = self.lock().results.get(&key) {
            debug!(key = %&key[..16], "Score cache hit");
            return hit.clone();
        }

        let result = pipeline::score(record, graph, config);

        let mut entries = self.lock();
        if !entries.results.contains_key(&key) {
            while entries.order.len() >= self.capacity {
                if let Some(oldest) = entries.order.pop_front() {
                    entries.results.remove(&oldest);
                }
            }
            entries.order.push_back(key.clone());
            entries.results.insert(key, result.clone());
        }
        result
    }

    pub fn len(&self) -> usize {
        self.lock().results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.results.clear();
        entries.order.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
