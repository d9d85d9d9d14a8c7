//! Service-Level Tests
//!
//! Exercises the cache coherence contract through a call-counting in-memory
//! repository: every repository method bumps a counter, so tests can assert
//! exactly when the service went to the store and when it was served from
//! cache.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use customer_ms::error::{Result, ServiceError};
use customer_ms::models::Customer;
use customer_ms::repository::CustomerRepository;
use customer_ms::service::CustomerService;

// == Counting Repository ==

/// In-memory repository that counts every call per operation.
#[derive(Default)]
struct CountingRepo {
    rows: Mutex<Vec<Customer>>,
    next_id: AtomicI64,
    /// When set, `update` fails with a store error
    fail_updates: AtomicBool,
    adds: AtomicUsize,
    gets: AtomicUsize,
    lists: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingRepo {
    fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    fn list_count(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustomerRepository for CountingRepo {
    async fn add(&self, code: &str, name: &str) -> Result<Customer> {
        self.adds.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|c| c.code == code) {
            return Err(ServiceError::Conflict(code.to_string()));
        }
        let customer = Customer {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            code: code.to_string(),
            name: name.to_string(),
        };
        rows.push(customer.clone());
        Ok(customer)
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<Customer>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.code == code).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Customer>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, customer: &Customer) -> Result<Customer> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(ServiceError::Store(sqlx::Error::RowNotFound));
        }
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| c.id == customer.id) {
            row.name = customer.name.clone();
        }
        Ok(customer.clone())
    }

    async fn delete(&self, customer: &Customer) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().retain(|c| c.id != customer.id);
        Ok(())
    }
}

fn service_with(capacity: usize, ttl: u64) -> (Arc<CountingRepo>, CustomerService) {
    let repo = Arc::new(CountingRepo::default());
    let service = CustomerService::new(repo.clone(), capacity, ttl);
    (repo, service)
}

// == Cache Coherence ==

#[tokio::test]
async fn test_get_after_create_skips_repository() {
    let (repo, service) = service_with(128, 300);

    let created = service.create("CUST0000001", "Alice").await.unwrap();
    let fetched = service.get("CUST0000001").await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(repo.get_count(), 0, "Create should have populated the cache");
}

#[tokio::test]
async fn test_get_after_update_skips_repository() {
    let (repo, service) = service_with(128, 300);

    service.create("CUST0000001", "Alice").await.unwrap();
    service.update("CUST0000001", "Alice Smith").await.unwrap();

    let fetched = service.get("CUST0000001").await.unwrap();
    assert_eq!(fetched.name, "Alice Smith");
    assert_eq!(repo.get_count(), 0, "Update should have refreshed the cache");
}

#[tokio::test]
async fn test_read_through_populates_cache() {
    let (repo, service) = service_with(128, 300);

    // Seed the store directly so the cache starts cold
    repo.add("CUST0000001", "Alice").await.unwrap();

    service.get("CUST0000001").await.unwrap();
    service.get("CUST0000001").await.unwrap();
    service.get("CUST0000001").await.unwrap();

    assert_eq!(repo.get_count(), 1, "Only the first get should hit the store");
}

// == List Invalidation ==

#[tokio::test]
async fn test_list_cached_until_mutation() {
    let (repo, service) = service_with(128, 300);

    service.create("CUST0000001", "Alice").await.unwrap();

    service.list().await.unwrap();
    service.list().await.unwrap();
    assert_eq!(repo.list_count(), 1, "Second list should be a cache hit");

    // Each mutation kind invalidates the cached list
    service.create("CUST0000002", "Bob").await.unwrap();
    assert_eq!(service.list().await.unwrap().len(), 2);
    assert_eq!(repo.list_count(), 2);

    service.update("CUST0000001", "Alice Smith").await.unwrap();
    let all = service.list().await.unwrap();
    assert_eq!(repo.list_count(), 3);
    assert_eq!(all[0].name, "Alice Smith");

    service.delete("CUST0000002").await.unwrap();
    assert_eq!(service.list().await.unwrap().len(), 1);
    assert_eq!(repo.list_count(), 4);
}

// == Capacity Eviction ==

#[tokio::test]
async fn test_item_cache_capacity_eviction() {
    let (repo, service) = service_with(2, 300);

    service.create("CUST0000001", "Alice").await.unwrap();
    service.create("CUST0000002", "Bob").await.unwrap();
    service.create("CUST0000003", "Carol").await.unwrap();

    // First-inserted entry was evicted; fetching it queries the store
    service.get("CUST0000001").await.unwrap();
    assert_eq!(repo.get_count(), 1);

    // The two newest entries are still cached
    service.get("CUST0000003").await.unwrap();
    assert_eq!(repo.get_count(), 1);
}

// == TTL Expiry ==

#[tokio::test]
async fn test_item_cache_ttl_expiry() {
    let (repo, service) = service_with(128, 1);

    service.create("CUST0000001", "Alice").await.unwrap();

    // Within the TTL: served from cache
    service.get("CUST0000001").await.unwrap();
    assert_eq!(repo.get_count(), 0);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    // Past the TTL: served from the store again
    service.get("CUST0000001").await.unwrap();
    assert_eq!(repo.get_count(), 1);
}

#[tokio::test]
async fn test_list_cache_ttl_expiry() {
    let (repo, service) = service_with(128, 1);

    service.list().await.unwrap();
    service.list().await.unwrap();
    assert_eq!(repo.list_count(), 1);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    service.list().await.unwrap();
    assert_eq!(repo.list_count(), 2);
}

// == Not-Found Propagation ==

#[tokio::test]
async fn test_not_found_propagates_from_all_paths() {
    let (_repo, service) = service_with(128, 300);

    assert!(matches!(
        service.get("CUST0000404").await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.update("CUST0000404", "Nobody").await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.delete("CUST0000404").await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_missed_get_does_not_populate_cache() {
    let (repo, service) = service_with(128, 300);

    // Each miss independently consults the store; no negative entry is cached
    for _ in 0..3 {
        assert!(matches!(
            service.get("CUST0000404").await,
            Err(ServiceError::NotFound(_))
        ));
    }
    assert_eq!(repo.get_count(), 3);
}

// == Atomic Failure ==

#[tokio::test]
async fn test_failed_update_leaves_caches_unmodified() {
    let (repo, service) = service_with(128, 300);

    service.create("CUST0000001", "Alice").await.unwrap();
    service.list().await.unwrap();
    let lists_before = repo.list_count();

    repo.fail_updates.store(true, Ordering::SeqCst);
    assert!(matches!(
        service.update("CUST0000001", "Alice Smith").await,
        Err(ServiceError::Store(_))
    ));

    // Item cache still serves the old value without a store round-trip
    let fetched = service.get("CUST0000001").await.unwrap();
    assert_eq!(fetched.name, "Alice");
    assert_eq!(repo.get_count(), 0);

    // List cache entry survived the failed mutation
    service.list().await.unwrap();
    assert_eq!(repo.list_count(), lists_before);
}

// == Validation & Conflict ==

#[tokio::test]
async fn test_create_rejects_malformed_input() {
    let (repo, service) = service_with(128, 300);

    assert!(matches!(
        service.create("BADCODE", "Alice").await,
        Err(ServiceError::Validation(_))
    ));
    assert!(matches!(
        service.create("CUST0000001", "  ").await,
        Err(ServiceError::Validation(_))
    ));
    assert_eq!(repo.adds.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_create_duplicate_code_conflicts() {
    let (_repo, service) = service_with(128, 300);

    service.create("CUST0000001", "Alice").await.unwrap();
    assert!(matches!(
        service.create("CUST0000001", "Bob").await,
        Err(ServiceError::Conflict(_))
    ));
}

// == End-to-End Scenario ==

#[tokio::test]
async fn test_full_crud_flow() {
    let (repo, service) = service_with(128, 300);

    let created = service.create("CUST0000001", "Alice").await.unwrap();
    assert_eq!(created.code, "CUST0000001");
    assert_eq!(created.name, "Alice");

    // Served from cache, no second repository read
    let fetched = service.get("CUST0000001").await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(repo.get_count(), 0);

    let all = service.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].code, "CUST0000001");

    let updated = service.update("CUST0000001", "Alice Smith").await.unwrap();
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(service.get("CUST0000001").await.unwrap().name, "Alice Smith");

    service.delete("CUST0000001").await.unwrap();
    assert!(matches!(
        service.get("CUST0000001").await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(service.list().await.unwrap().is_empty());
}

// == Sweep ==

#[tokio::test]
async fn test_purge_expired_reports_removed_entries() {
    let (_repo, service) = service_with(128, 1);

    service.create("CUST0000001", "Alice").await.unwrap();
    service.list().await.unwrap();

    assert_eq!(service.purge_expired().await, 0);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    // One item entry plus the list entry
    assert_eq!(service.purge_expired().await, 2);
}
