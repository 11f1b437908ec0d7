use crate::{Recipe, SearchParameters, SearchResponse};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Configuration for the cache system
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Maximum number of cached entries, `None` for no bound
    pub max_entries: Option<usize>,
    /// Whether caching is enabled
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: None,
            enabled: true,
        }
    }
}

impl CacheConfig {
    pub fn bounded(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            max_entries: None,
            enabled: false,
        }
    }
}

/// Cache key for lookups
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum CacheKey {
    Search(String), // Hash of the search signature
    Recipe(u64),
}

impl CacheKey {
    /// Generate a cache key for search parameters
    pub fn from_search(params: &SearchParameters) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(params.signature().as_bytes());
        CacheKey::Search(hex::encode(hasher.finalize()))
    }

    pub fn from_recipe(id: u64) -> Self {
        CacheKey::Recipe(id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CachedPayload {
    Search(SearchResponse),
    Recipe(Box<Recipe>),
}

/// Cached payload with metadata
#[derive(Clone, Debug)]
pub struct CachedResult {
    pub data: CachedPayload,
    pub created_at: DateTime<Utc>,
    sequence: u64,
}

/// In-memory store using DashMap for thread safety. Entries live until they
/// are overwritten, the cache is cleared, or a configured bound pushes them out.
pub struct RecipeCache {
    cache: DashMap<CacheKey, CachedResult>,
    next_sequence: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    pub config: CacheConfig,
}

impl RecipeCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            cache: DashMap::new(),
            next_sequence: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            config,
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<CachedPayload> {
        if !self.config.enabled {
            return None;
        }

        if let Some(cached) = self.cache.get(key) {
            log::debug!("Cache hit for key: {:?}", key);
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Some(cached.data.clone());
        }

        log::debug!("Cache miss for key: {:?}", key);
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store `data` under `key`, replacing whatever was there.
    pub fn put(&self, key: CacheKey, data: CachedPayload) {
        if !self.config.enabled || self.config.max_entries == Some(0) {
            return;
        }

        if let Some(max_entries) = self.config.max_entries {
            if !self.cache.contains_key(&key) && self.cache.len() >= max_entries {
                self.evict_oldest();
            }
        }

        let cached_result = CachedResult {
            data,
            created_at: Utc::now(),
            sequence: self.next_sequence.fetch_add(1, Ordering::Relaxed),
        };
        self.cache.insert(key.clone(), cached_result);
        log::debug!("Stored in cache with key: {:?}", key);
    }

    fn evict_oldest(&self) {
        let oldest = self
            .cache
            .iter()
            .min_by_key(|entry| entry.value().sequence)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            self.cache.remove(&key);
            log::debug!("Evicted oldest cache entry: {:?}", key);
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Clear all cache entries
    pub fn clear(&self) {
        self.cache.clear();
        log::info!("Cache cleared");
    }

    pub fn stats(&self) -> CacheStats {
        let total_entries = self.cache.len();
        let search_entries = self
            .cache
            .iter()
            .filter(|entry| matches!(entry.key(), CacheKey::Search(_)))
            .count();
        let oldest_entry = self.cache.iter().map(|entry| entry.value().created_at).min();

        CacheStats {
            total_entries,
            search_entries,
            recipe_entries: total_entries - search_entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            max_entries: self.config.max_entries,
            oldest_entry,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub search_entries: usize,
    pub recipe_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub max_entries: Option<usize>,
    pub oldest_entry: Option<DateTime<Utc>>,
}

/// Thread-safe wrapper for the cache
pub type SharedRecipeCache = Arc<RecipeCache>;
