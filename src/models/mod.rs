//! Data models representing database entities and API payloads.

/// Account entity and single-account request bodies
pub mod account;
/// Transfer request and receipt
pub mod transfer;
