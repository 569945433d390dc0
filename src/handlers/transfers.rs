//! Transfer HTTP handler.
//!
//! - POST /transfer/ - Move money between two accounts

use axum::{Json, extract::State};

use crate::{
    db::DbPool,
    error::AppError,
    models::transfer::{TransferReceipt, TransferRequest},
    services::transaction_service,
};

/// Transfer money between accounts.
///
/// # Request Body
///
/// ```json
/// {
///   "from_account_number": "0459912830",
///   "to_account_number": "7712004431",
///   "amount": 200.0
/// }
/// ```
///
/// # Atomicity
///
/// Both accounts are updated in a single atomic unit.
/// Either both succeed or both fail.
///
/// # Errors
///
/// - 400: same account, non-positive amount, insufficient funds
/// - 404: sender or receiver not found
pub async fn create_transfer(
    State(pool): State<DbPool>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferReceipt>, AppError> {
    let receipt = transaction_service::transfer(
        &pool,
        &request.from_account_number,
        &request.to_account_number,
        request.amount,
    )
    .await?;

    Ok(Json(receipt))
}
