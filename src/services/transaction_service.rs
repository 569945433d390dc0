//! Transaction service - balance-changing operations.
//!
//! Each operation is one atomic unit opened with [`db::begin_unit`]:
//! balances are read inside the unit, the new values are written through
//! the account store, and the unit commits. Any early return drops the
//! unit, which rolls it back, so a failed operation never leaves a partial
//! balance change behind.

use crate::{
    db::{self, DbPool},
    error::{AccountRole, AppError},
    models::{account::Account, transfer::TransferReceipt},
    services::account_store,
};

/// Add funds to an account.
///
/// # Errors
///
/// - `InvalidAmount`: `amount` is not strictly positive, or the new balance
///   would not be a finite number
/// - `AccountNotFound`: no account with this number
/// - `Database`: storage failure, unit rolled back
pub async fn deposit(
    pool: &DbPool,
    account_number: &str,
    amount: f64,
) -> Result<Account, AppError> {
    // Validate amount
    ensure_positive(amount, "Deposit amount must be positive.")?;

    // Start atomic unit, write lock held from here
    let mut tx = db::begin_unit(pool).await?;

    let mut account = account_store::find_by_account_number(&mut *tx, account_number)
        .await?
        .ok_or(AppError::AccountNotFound(AccountRole::Account))?;

    let new_balance = account.balance + amount;
    if !new_balance.is_finite() {
        tx.rollback().await?;
        return Err(balance_out_of_range());
    }

    // Update balance
    account_store::update_balance(&mut *tx, account_number, new_balance).await?;
    account.balance = new_balance;

    tx.commit().await?;

    Ok(account)
}

/// Take funds out of an account.
///
/// # Errors
///
/// - `InvalidAmount`: `amount` is not strictly positive
/// - `AccountNotFound`: no account with this number
/// - `InsufficientFunds`: balance is lower than `amount`
/// - `Database`: storage failure, unit rolled back
pub async fn withdraw(
    pool: &DbPool,
    account_number: &str,
    amount: f64,
) -> Result<Account, AppError> {
    // Validate amount
    ensure_positive(amount, "Withdrawal amount must be positive.")?;

    // Start atomic unit, write lock held from here
    let mut tx = db::begin_unit(pool).await?;

    let mut account = account_store::find_by_account_number(&mut *tx, account_number)
        .await?
        .ok_or(AppError::AccountNotFound(AccountRole::Account))?;

    // Validate sufficient balance
    if account.balance < amount {
        tx.rollback().await?;
        return Err(AppError::InsufficientFunds(AccountRole::Account));
    }

    // Update balance
    account.balance -= amount;
    account_store::update_balance(&mut *tx, account_number, account.balance).await?;

    tx.commit().await?;

    Ok(account)
}

/// Move funds from one account to another.
///
/// # Checks (first failure wins)
///
/// 1. Accounts differ
/// 2. Amount is strictly positive
/// 3. Sender exists
/// 4. Sender balance covers the amount
/// 5. Receiver exists
///
/// Checks 1 and 2 need no store access. The rest run inside the unit, so
/// the balances used for the arithmetic are the ones the unit holds the
/// write lock on. Both writes commit together or not at all. A credit that
/// would push the receiver's balance out of the finite range is rejected
/// with `InvalidAmount` before either row is written.
pub async fn transfer(
    pool: &DbPool,
    from_account_number: &str,
    to_account_number: &str,
    amount: f64,
) -> Result<TransferReceipt, AppError> {
    // Prevent transferring to same account
    if from_account_number == to_account_number {
        return Err(AppError::InvalidTransfer(
            "Cannot transfer funds to the same account.".to_string(),
        ));
    }

    // Validate amount
    ensure_positive(amount, "Transfer amount must be positive.")?;

    // Start atomic unit, both reads and both writes happen inside it
    let mut tx = db::begin_unit(pool).await?;

    // Sender must exist and cover the amount
    let sender = account_store::find_by_account_number(&mut *tx, from_account_number)
        .await?
        .ok_or(AppError::AccountNotFound(AccountRole::Sender))?;

    if sender.balance < amount {
        tx.rollback().await?;
        return Err(AppError::InsufficientFunds(AccountRole::Sender));
    }

    let receiver = account_store::find_by_account_number(&mut *tx, to_account_number)
        .await?
        .ok_or(AppError::AccountNotFound(AccountRole::Receiver))?;

    let receiver_balance = receiver.balance + amount;
    if !receiver_balance.is_finite() {
        tx.rollback().await?;
        return Err(balance_out_of_range());
    }

    // Update both balances
    account_store::update_balance(&mut *tx, from_account_number, sender.balance - amount).await?;
    account_store::update_balance(&mut *tx, to_account_number, receiver_balance).await?;

    // Commit both rows or neither
    tx.commit().await?;

    tracing::info!(
        "Transferred {} from {} to {}",
        amount,
        from_account_number,
        to_account_number
    );

    Ok(TransferReceipt::new(
        from_account_number.to_string(),
        to_account_number.to_string(),
        amount,
    ))
}

fn balance_out_of_range() -> AppError {
    AppError::InvalidAmount("Resulting balance exceeds the supported range.".to_string())
}

fn ensure_positive(amount: f64, message: &str) -> Result<(), AppError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidAmount(message.to_string()))
    }
}
