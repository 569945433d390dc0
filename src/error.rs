//! Error types and HTTP error response handling.
//!
//! The service layer only ever returns `AppError`. The mapping to HTTP
//! status codes lives in the `IntoResponse` impl at the bottom of this file,
//! so nothing below the handlers knows about transport concerns.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Which side of an operation an account error refers to.
///
/// Single-account operations report `Account`; transfers distinguish the
/// sender from the receiver so clients can tell which number was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Account,
    Sender,
    Receiver,
}

impl AccountRole {
    fn not_found_message(self) -> &'static str {
        match self {
            AccountRole::Account => "Account not found",
            AccountRole::Sender => "Sender account not found.",
            AccountRole::Receiver => "Receiver account not found.",
        }
    }

    fn insufficient_funds_message(self) -> &'static str {
        match self {
            AccountRole::Sender => "Insufficient funds in sender account.",
            AccountRole::Account | AccountRole::Receiver => "Insufficient funds",
        }
    }
}

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation**: `InvalidAmount`, `InvalidTransfer` (bad input, no side effects)
/// - **Lookup**: `AccountNotFound` (unknown account number)
/// - **Business rule**: `InsufficientFunds`
/// - **Storage**: `Database`, any sqlx failure; the open unit is rolled back
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Store operation failed (connection, query, commit).
    ///
    /// Returns HTTP 500. Details are logged, never sent to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Amount is zero, negative, or not a number.
    ///
    /// Returns HTTP 400.
    #[error("{0}")]
    InvalidAmount(String),

    /// Transfer request is structurally impossible (same account on both sides).
    ///
    /// Returns HTTP 400.
    #[error("{0}")]
    InvalidTransfer(String),

    /// No account with the requested number exists.
    ///
    /// Returns HTTP 404.
    #[error("{}", .0.not_found_message())]
    AccountNotFound(AccountRole),

    /// Balance is lower than the amount being taken out.
    ///
    /// Returns HTTP 400.
    #[error("{}", .0.insufficient_funds_message())]
    InsufficientFunds(AccountRole),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::AccountNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidAmount(_)
            | AppError::InvalidTransfer(_)
            | AppError::InsufficientFunds(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "internal_error",
            AppError::InvalidAmount(_) => "invalid_amount",
            AppError::InvalidTransfer(_) => "invalid_transfer",
            AppError::AccountNotFound(_) => "account_not_found",
            AppError::InsufficientFunds(_) => "insufficient_funds",
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "detail": "Human-readable error message",
///   "code": "error_type"
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "detail": message,
            "code": self.code(),
        }));

        (self.status_code(), body).into_response()
    }
}
