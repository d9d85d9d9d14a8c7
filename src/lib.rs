//! Customer MS - a customer record service
//!
//! CRUD operations over customer records, backed by SQLite and fronted by a
//! pair of bounded TTL caches (per-code entries plus the full list).

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::CustomerService;
pub use tasks::spawn_cleanup_task;
