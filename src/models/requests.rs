//! Request DTOs for the customer service API
//!
//! Defines the structure of incoming HTTP request bodies. Field-constraint
//! validation lives here, upstream of the service core.

use serde::Deserialize;

use crate::models::customer::is_valid_code;

/// Request body for creating a customer (POST /customers)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    /// Unique business code (CUST + 7 digits, case-insensitive on input)
    pub code: String,
    /// Display name
    pub name: String,
}

impl CreateCustomerRequest {
    /// Normalizes the code to uppercase, then validates both fields.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&mut self) -> Option<String> {
        self.code = self.code.to_uppercase();
        if !is_valid_code(&self.code) {
            return Some(format!(
                "Code '{}' does not match the CUST0000000 pattern",
                self.code
            ));
        }
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        None
    }
}

/// Request body for renaming a customer (PUT /customers/:code)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomerRequest {
    /// New display name
    pub name: String,
}

impl UpdateCustomerRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        None
    }
}
