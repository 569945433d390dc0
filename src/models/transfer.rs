//! Transfer request and receipt types.

use serde::{Deserialize, Serialize};

/// Request to move funds between two accounts.
///
/// # JSON Example
///
/// ```json
/// {
///   "from_account_number": "0459912830",
///   "to_account_number": "7712004431",
///   "amount": 200.0
/// }
/// ```
///
/// # Atomicity Guarantee
///
/// Both balances are read and written in the same atomic unit.
/// Either both updates commit or neither does.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub from_account_number: String,
    pub to_account_number: String,
    pub amount: f64,
}

/// Success record for a completed transfer.
///
/// No entity is created by a transfer; this only echoes what moved.
///
/// ```json
/// {
///   "message": "Transfer successful",
///   "from_account": "0459912830",
///   "to_account": "7712004431",
///   "amount": 200.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub message: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
}

impl TransferReceipt {
    pub fn new(from_account: String, to_account: String, amount: f64) -> Self {
        Self {
            message: "Transfer successful".to_string(),
            from_account,
            to_account,
            amount,
        }
    }
}
