//! Account store: schema ownership and single-row access.
//!
//! Row primitives are generic over `sqlx::Executor`, so the same query runs
//! against the pool or inside an atomic unit opened by the transaction
//! service. Absence is reported as `None`; callers decide which side of an
//! operation the missing account was on.

use rand::Rng;
use sqlx::{Executor, Sqlite};

use crate::{
    db::DbPool,
    error::AppError,
    models::account::Account,
};

/// Number of digits in a public account number.
pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// Attempts made to find an unused account number before giving up.
pub const MAX_CREATE_ATTEMPTS: usize = 5;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_number TEXT UNIQUE NOT NULL,
    account_holder TEXT NOT NULL,
    balance REAL NOT NULL
)
"#;

/// Ensure the `accounts` table exists.
///
/// Safe to call on every startup. An error here means the service cannot
/// serve requests and should abort.
pub async fn initialize(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    tracing::info!("Accounts schema initialized");
    Ok(())
}

/// Random 10-digit account number, leading zeros allowed.
pub fn generate_account_number() -> String {
    let mut rng = rand::rng();
    (0..ACCOUNT_NUMBER_LEN)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Create an account with a freshly generated account number.
///
/// # Errors
///
/// - `InvalidAmount`: `initial_deposit` is negative or NaN
/// - `Database`: storage failure, or every attempt hit a taken number
pub async fn create_account(
    pool: &DbPool,
    account_holder: &str,
    initial_deposit: f64,
) -> Result<Account, AppError> {
    create_account_with(pool, account_holder, initial_deposit, generate_account_number).await
}

/// Same as [`create_account`] with a caller-supplied number generator.
///
/// A uniqueness violation on `account_number` draws a new number and tries
/// again, up to [`MAX_CREATE_ATTEMPTS`] inserts in total. Any other storage
/// error is returned immediately.
pub async fn create_account_with<F>(
    pool: &DbPool,
    account_holder: &str,
    initial_deposit: f64,
    mut next_number: F,
) -> Result<Account, AppError>
where
    F: FnMut() -> String,
{
    if !(initial_deposit.is_finite() && initial_deposit >= 0.0) {
        return Err(AppError::InvalidAmount(
            "Initial deposit cannot be negative.".to_string(),
        ));
    }

    let mut attempt = 1;
    loop {
        let account_number = next_number();
        match insert_account(pool, &account_number, account_holder, initial_deposit).await {
            Ok(account) => {
                tracing::info!("Created account {}", account.account_number);
                return Ok(account);
            }
            Err(e) if is_unique_violation(&e) && attempt < MAX_CREATE_ATTEMPTS => {
                tracing::warn!(
                    "Account number {} already taken (attempt {}/{})",
                    account_number,
                    attempt,
                    MAX_CREATE_ATTEMPTS
                );
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Insert a single account row and return it with its assigned id.
pub async fn insert_account<'e, E>(
    executor: E,
    account_number: &str,
    account_holder: &str,
    balance: f64,
) -> Result<Account, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (account_number, account_holder, balance)
        VALUES (?, ?, ?)
        RETURNING id, account_number, account_holder, balance
        "#,
    )
    .bind(account_number)
    .bind(account_holder)
    .bind(balance)
    .fetch_one(executor)
    .await
}

/// Look up an account by its public number.
pub async fn find_by_account_number<'e, E>(
    executor: E,
    account_number: &str,
) -> Result<Option<Account>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Account>(
        "SELECT id, account_number, account_holder, balance FROM accounts WHERE account_number = ?",
    )
    .bind(account_number)
    .fetch_optional(executor)
    .await
}

/// Overwrite the balance of one account.
///
/// The caller has already validated `new_balance`. Returns the number of
/// rows touched, 0 when no account matches.
pub async fn update_balance<'e, E>(
    executor: E,
    account_number: &str,
    new_balance: f64,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE accounts SET balance = ? WHERE account_number = ?")
        .bind(new_balance)
        .bind(account_number)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[test]
    fn generated_numbers_are_ten_digits() {
        for _ in 0..100 {
            let number = generate_account_number();
            assert_eq!(number.len(), ACCOUNT_NUMBER_LEN);
            assert!(number.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let (_dir, pool) = test_pool().await;
        initialize(&pool).await.unwrap();
        initialize(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn create_then_find() {
        let (_dir, pool) = test_pool().await;

        let created = create_account(&pool, "Aswin", 100.0).await.unwrap();
        assert_eq!(created.account_holder, "Aswin");
        assert_eq!(created.balance, 100.0);

        let found = find_by_account_number(&pool, &created.account_number)
            .await
            .unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn ids_are_assigned_by_the_store() {
        let (_dir, pool) = test_pool().await;

        let first = create_account(&pool, "A", 0.0).await.unwrap();
        let second = create_account(&pool, "B", 0.0).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn negative_initial_deposit_is_rejected() {
        let (_dir, pool) = test_pool().await;

        let err = create_account(&pool, "Sreerag", -50.0).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(ref m) if m.contains("cannot be negative")));

        let err = create_account(&pool, "Sreerag", f64::NAN).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
    }

    #[tokio::test]
    async fn collision_draws_a_new_number() {
        let (_dir, pool) = test_pool().await;
        insert_account(&pool, "1111111111", "Taken", 0.0).await.unwrap();

        let mut numbers = vec!["2222222222", "1111111111"];
        let account = create_account_with(&pool, "Felix", 0.0, || {
            numbers.pop().unwrap().to_string()
        })
        .await
        .unwrap();

        assert_eq!(account.account_number, "2222222222");
    }

    #[tokio::test]
    async fn collision_gives_up_after_bounded_attempts() {
        let (_dir, pool) = test_pool().await;
        insert_account(&pool, "1111111111", "Taken", 0.0).await.unwrap();

        let mut calls = 0;
        let err = create_account_with(&pool, "Felix", 0.0, || {
            calls += 1;
            "1111111111".to_string()
        })
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(calls, MAX_CREATE_ATTEMPTS);
    }

    #[tokio::test]
    async fn update_balance_reports_missing_rows() {
        let (_dir, pool) = test_pool().await;
        let account = create_account(&pool, "Dev", 10.0).await.unwrap();

        assert_eq!(update_balance(&pool, &account.account_number, 42.5).await.unwrap(), 1);
        assert_eq!(update_balance(&pool, "0000000000", 1.0).await.unwrap(), 0);

        let found = find_by_account_number(&pool, &account.account_number)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.balance, 42.5);
    }
}
