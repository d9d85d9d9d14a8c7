//! Data models for the customer service
//!
//! The persisted `Customer` entity plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod customer;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use customer::{is_valid_code, Customer};
pub use requests::{CreateCustomerRequest, UpdateCustomerRequest};
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse, StatsResponse};
