//! HTTP request handlers (route handlers).
//!
//! Handlers only unpack the request, call into `services`, and wrap the
//! result. All validation and status mapping happens below them.

/// Account management endpoints
pub mod accounts;
/// Health check endpoint
pub mod health;
/// Transfer endpoint
pub mod transfers;
