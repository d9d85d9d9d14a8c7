//! Response DTOs for the customer service API
//!
//! Defines the structure of outgoing HTTP response bodies. Customer
//! payloads serialize the entity directly; the types here cover the
//! auxiliary endpoints.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
///
/// Reports both caches side by side.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Per-code item cache counters
    pub item_cache: StatsResponse,
    /// Whole-list cache counters
    pub list_cache: StatsResponse,
}

impl CacheStatsResponse {
    /// Creates a new CacheStatsResponse from both caches' statistics
    pub fn new(item: CacheStats, list: CacheStats) -> Self {
        Self {
            item_cache: StatsResponse::from_stats(item),
            list_cache: StatsResponse::from_stats(list),
        }
    }
}

/// Counters for a single cache instance
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn from_stats(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
