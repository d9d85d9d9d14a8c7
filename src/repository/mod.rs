//! Repository Module
//!
//! Abstraction over customer persistence. The service talks to the
//! `CustomerRepository` trait only; `SqliteCustomerRepository` is the one
//! concrete implementation. Durability and transactional guarantees live
//! here — the cache layer has no knowledge of this module's internals.

mod sqlite;

pub use sqlite::SqliteCustomerRepository;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Customer;

// == Repository Trait ==
/// Persistence operations for customer records.
///
/// Every method may fail with `ServiceError::Store` on an underlying I/O
/// failure; failures are propagated, never retried, at this layer.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persists a new customer. Fails with `ServiceError::Conflict` if the
    /// code already exists.
    async fn add(&self, code: &str, name: &str) -> Result<Customer>;

    /// Returns the current persisted customer for a code, or `None`.
    async fn get_by_code(&self, code: &str) -> Result<Option<Customer>>;

    /// Returns a full snapshot of all customers, ordered by id.
    async fn list_all(&self) -> Result<Vec<Customer>>;

    /// Persists mutated fields for an existing customer. The caller must
    /// have fetched the entity first; behavior is undefined if it no
    /// longer exists.
    async fn update(&self, customer: &Customer) -> Result<Customer>;

    /// Removes the persisted customer.
    async fn delete(&self, customer: &Customer) -> Result<()>;
}
