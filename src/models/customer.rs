//! Customer entity
//!
//! The single record type managed by the service.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sqlx::FromRow;

/// Business-code pattern: "CUST" followed by exactly seven digits.
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CUST\d{7}$").expect("valid code pattern"));

// == Customer ==
/// A customer record.
///
/// `id` is assigned by the store and never reused; `code` uniquely
/// identifies the customer for its entire lifetime and is immutable after
/// creation. Only `name` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Customer {
    /// Store-assigned row id
    pub id: i64,
    /// Unique business code (CUST + 7 digits)
    pub code: String,
    /// Display name
    pub name: String,
}

// == Code Validation ==
/// Checks whether a string is a well-formed customer code.
///
/// Codes are matched case-sensitively; callers normalize to uppercase
/// before validating.
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}
