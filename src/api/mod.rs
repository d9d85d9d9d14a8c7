//! API Module
//!
//! HTTP handlers and routing for the customer service REST API.
//!
//! # Endpoints
//! - `POST /customers` - Create a customer
//! - `GET /customers/:code` - Retrieve a customer by code
//! - `GET /customers` - List all customers
//! - `PUT /customers/:code` - Rename a customer
//! - `DELETE /customers/:code` - Delete a customer
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
