//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /accounts/ - Open a new account
//! - GET /accounts/{account_number}/balance - Current account state
//! - POST /accounts/{account_number}/deposit - Add funds
//! - POST /accounts/{account_number}/withdraw - Take funds out

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    db::DbPool,
    error::{AccountRole, AppError},
    models::account::{Account, AmountRequest, CreateAccountRequest},
    services::{account_store, transaction_service},
};

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_holder": "Aswin",
///   "initial_deposit": 100.0
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created account
/// - **Error (400)**: negative initial deposit
pub async fn create_account(
    State(pool): State<DbPool>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let account =
        account_store::create_account(&pool, &request.account_holder, request.initial_deposit)
            .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Get an account and its current balance.
///
/// Returns 404 if no account has this number.
pub async fn get_balance(
    State(pool): State<DbPool>,
    Path(account_number): Path<String>,
) -> Result<Json<Account>, AppError> {
    let account = account_store::find_by_account_number(&pool, &account_number)
        .await?
        .ok_or(AppError::AccountNotFound(AccountRole::Account))?;

    Ok(Json(account))
}

/// Deposit funds.
///
/// # Request Body
///
/// ```json
/// { "amount": 150.0 }
/// ```
///
/// Returns the account with its new balance, 400 for a non-positive
/// amount, 404 for an unknown account.
pub async fn deposit(
    State(pool): State<DbPool>,
    Path(account_number): Path<String>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<Account>, AppError> {
    let account = transaction_service::deposit(&pool, &account_number, request.amount).await?;

    Ok(Json(account))
}

/// Withdraw funds.
///
/// # Validation
///
/// - Amount must be positive
/// - Balance must cover the amount (400 "Insufficient funds" otherwise)
pub async fn withdraw(
    State(pool): State<DbPool>,
    Path(account_number): Path<String>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<Account>, AppError> {
    let account = transaction_service::withdraw(&pool, &account_number, request.amount).await?;

    Ok(Json(account))
}
