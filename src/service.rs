//! Customer Service Module
//!
//! Orchestrates the CRUD operations, using the cache pair as a strict
//! read-through/write-through accelerator in front of the repository.
//!
//! Two caches are kept per service instance: an item cache keyed by
//! customer code, and a list cache holding the full customer list under a
//! single sentinel key. Every mutation clears the list cache before
//! returning — a stale list is a materially wrong answer, a missing list
//! entry is just a future miss.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{BoundedTtlCache, CacheStats, LIST_KEY};
use crate::error::{Result, ServiceError};
use crate::models::{is_valid_code, Customer};
use crate::repository::CustomerRepository;

// == Customer Service ==
/// CRUD orchestration over a repository with a bounded TTL cache pair.
///
/// Shared across all concurrent requests; the caches are guarded by
/// `RwLock` and locks are never held across a repository call, so cache
/// checks stay non-suspending. Concurrent writes to the same code are
/// last-writer-wins at the cache layer.
pub struct CustomerService {
    /// Persistence backend
    repo: Arc<dyn CustomerRepository>,
    /// code -> Customer, bounded to the configured capacity
    item_cache: RwLock<BoundedTtlCache<String, Customer>>,
    /// Full list under `LIST_KEY`, capacity 1
    list_cache: RwLock<BoundedTtlCache<&'static str, Vec<Customer>>>,
}

impl CustomerService {
    // == Constructor ==
    /// Creates a new service over the given repository.
    ///
    /// # Arguments
    /// * `repo` - Persistence backend
    /// * `cache_capacity` - Maximum item cache entries
    /// * `cache_ttl` - Cache TTL in seconds (item and list caches)
    pub fn new(repo: Arc<dyn CustomerRepository>, cache_capacity: usize, cache_ttl: u64) -> Self {
        Self {
            repo,
            item_cache: RwLock::new(BoundedTtlCache::new(cache_capacity, cache_ttl)),
            list_cache: RwLock::new(BoundedTtlCache::new(1, cache_ttl)),
        }
    }

    // == Create ==
    /// Persists a new customer and populates the item cache with it.
    ///
    /// Fails with `Conflict` if the code already exists. The format checks
    /// normally run in the request layer; they are repeated here so the
    /// core rejects inputs it cannot satisfy if they slip through.
    pub async fn create(&self, code: &str, name: &str) -> Result<Customer> {
        if !is_valid_code(code) {
            return Err(ServiceError::Validation(format!(
                "Code '{}' does not match the CUST0000000 pattern",
                code
            )));
        }
        if name.trim().is_empty() {
            return Err(ServiceError::Validation("Name cannot be empty".to_string()));
        }

        let created = self.repo.add(code, name).await?;

        self.item_cache
            .write()
            .await
            .put(created.code.clone(), created.clone());
        self.list_cache.write().await.clear();

        debug!(code, "customer created");
        Ok(created)
    }

    // == Get ==
    /// Returns the customer for a code, reading through the item cache.
    ///
    /// A cache miss triggers a repository lookup; an absent code fails with
    /// `NotFound` and leaves no cache entry behind.
    pub async fn get(&self, code: &str) -> Result<Customer> {
        if let Some(hit) = self.item_cache.write().await.get(code) {
            debug!(code, "item cache hit");
            return Ok(hit);
        }

        let customer = self
            .repo
            .get_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(code.to_string()))?;

        self.item_cache
            .write()
            .await
            .put(customer.code.clone(), customer.clone());
        Ok(customer)
    }

    // == List ==
    /// Returns all customers, reading through the list cache.
    pub async fn list(&self) -> Result<Vec<Customer>> {
        if let Some(hit) = self.list_cache.write().await.get(LIST_KEY) {
            debug!("list cache hit");
            return Ok(hit);
        }

        let all = self.repo.list_all().await?;
        self.list_cache.write().await.put(LIST_KEY, all.clone());
        Ok(all)
    }

    // == Update ==
    /// Renames a customer and refreshes the caches.
    ///
    /// The current entity is resolved through the cache-aware `get` path,
    /// so within the TTL window the update may operate on a cached copy
    /// whose name was changed in the store by another path; the store is
    /// not re-verified before mutating. A failed repository update leaves
    /// both caches unmodified.
    pub async fn update(&self, code: &str, new_name: &str) -> Result<Customer> {
        let mut customer = self.get(code).await?;
        customer.name = new_name.to_string();

        let updated = self.repo.update(&customer).await?;

        self.item_cache
            .write()
            .await
            .put(updated.code.clone(), updated.clone());
        self.list_cache.write().await.clear();

        debug!(code, "customer updated");
        Ok(updated)
    }

    // == Delete ==
    /// Deletes a customer and evicts it from the caches.
    ///
    /// Resolves the entity through the same cache-aware `get` path as
    /// `update`, with the same bounded staleness window.
    pub async fn delete(&self, code: &str) -> Result<()> {
        let customer = self.get(code).await?;

        self.repo.delete(&customer).await?;

        self.item_cache.write().await.remove(code);
        self.list_cache.write().await.clear();

        debug!(code, "customer deleted");
        Ok(())
    }

    // == Purge Expired ==
    /// Sweeps expired entries from both caches.
    ///
    /// Returns the number of entries removed. Correctness does not depend
    /// on this; lazy expiry on access already rejects stale entries.
    pub async fn purge_expired(&self) -> usize {
        let mut removed = self.item_cache.write().await.purge_expired();
        removed += self.list_cache.write().await.purge_expired();
        removed
    }

    // == Stats ==
    /// Returns a snapshot of both caches' counters (item, list).
    pub async fn cache_stats(&self) -> (CacheStats, CacheStats) {
        let item = self.item_cache.read().await.stats();
        let list = self.list_cache.read().await.stats();
        (item, list)
    }
}
