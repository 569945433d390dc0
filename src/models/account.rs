//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: the stored row, also returned to clients as-is
//! - `CreateAccountRequest`: request body for opening an account
//! - `AmountRequest`: request body for deposits and withdrawals

use serde::{Deserialize, Serialize};

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table:
/// - `id`: surrogate key assigned by the store, never reused
/// - `account_number`: 10 ASCII digits, unique, the public identifier
/// - `account_holder`: display name, fixed at creation
/// - `balance`: current funds, never negative
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "account_number": "0459912830",
///   "account_holder": "Aswin",
///   "balance": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub account_number: String,
    pub account_holder: String,
    pub balance: f64,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_holder": "Aswin",
///   "initial_deposit": 100.0
/// }
/// ```
///
/// # Validation
///
/// - `initial_deposit`: Optional, defaults to 0, must not be negative
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub account_holder: String,

    #[serde(default)]
    pub initial_deposit: f64,
}

/// Request body for deposits and withdrawals.
///
/// ```json
/// { "amount": 150.0 }
/// ```
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub amount: f64,
}
