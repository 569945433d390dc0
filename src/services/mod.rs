//! Business logic services.
//!
//! Services contain the store access and balance rules, separated from the
//! HTTP handlers. Every function takes the pool explicitly.

/// Schema and single-row account primitives
pub mod account_store;
/// Deposit, withdraw and transfer
pub mod transaction_service;
