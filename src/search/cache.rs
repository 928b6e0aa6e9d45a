// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LRU cache of search responses, keyed by the full request.

use super::response::SearchResponse;
use crate::types::SearchRequest;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

/// Default number of cached responses.
pub const DEFAULT_CACHE_SIZE: usize = 128;

/// Hit/miss counters for tuning the cache size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct Inner {
    entries: LruCache<String, SearchResponse>,
    stats: CacheStats,
}

/// Thread-safe response cache. Callers clear it whenever the catalog changes.
pub struct SearchCache {
    inner: Mutex<Inner>,
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}

impl SearchCache {
    /// A capacity of 0 is bumped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                stats: CacheStats::default(),
            }),
        }
    }

    pub fn get(&self, request: &SearchRequest) -> Option<SearchResponse> {
        let key = request.cache_key();
        let mut inner = self.inner.lock();
        let cached = inner.entries.get(&key).cloned();
        match cached {
            Some(response) => {
                inner.stats.hits += 1;
                Some(response)
            }
            None => {
                inner.stats.misses += 1;
                None
            }
        }
    }

    pub fn put(&self, request: &SearchRequest, response: SearchResponse) {
        self.inner.lock().entries.put(request.cache_key(), response);
    }

    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }
}
