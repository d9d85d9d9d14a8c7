//! SQLite Repository Module
//!
//! Concrete `CustomerRepository` backed by a SQLite connection pool. Each
//! call runs on a pooled connection acquired for its duration only.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::{Result, ServiceError};
use crate::models::Customer;
use crate::repository::CustomerRepository;

// == SQLite Repository ==
/// SQLite implementation of `CustomerRepository`.
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    /// Creates a new repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn add(&self, code: &str, name: &str) -> Result<Customer> {
        let result = sqlx::query("INSERT INTO customers (code, name) VALUES (?, ?)")
            .bind(code)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    ServiceError::Conflict(code.to_string())
                }
                _ => ServiceError::Store(e),
            })?;

        Ok(Customer {
            id: result.last_insert_rowid(),
            code: code.to_string(),
            name: name.to_string(),
        })
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<Customer>> {
        let customer =
            sqlx::query_as::<_, Customer>("SELECT id, code, name FROM customers WHERE code = ?")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;

        Ok(customer)
    }

    async fn list_all(&self) -> Result<Vec<Customer>> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT id, code, name FROM customers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(customers)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer> {
        sqlx::query("UPDATE customers SET name = ? WHERE id = ?")
            .bind(&customer.name)
            .bind(customer.id)
            .execute(&self.pool)
            .await?;

        Ok(customer.clone())
    }

    async fn delete(&self, customer: &Customer) -> Result<()> {
        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(customer.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
