//! Error types for the ticket office core.
//!
//! This module aggregates the domain-specific error types (configuration, input validation,
//! booking, authentication) together with storage and hashing errors into a single [`Error`].
//! Every variant is recoverable: callers surface the failure and let the user retry with new
//! input. Nothing here is retried automatically.

pub mod auth;
pub mod booking;
pub mod config;
pub mod validation;

use thiserror::Error;

use crate::server::error::{
    auth::AuthError, booking::BookingError, config::ConfigError, validation::ValidationError,
};

/// Main error type for the ticket office core.
///
/// Uses `thiserror`'s `#[from]` attribute so domain errors and library errors convert
/// automatically through the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (malformed or missing request fields)
/// - Booking errors (unknown train/station, seat conflicts, missing tickets)
/// - Authentication errors (bad credentials, non-admin access, duplicate accounts)
/// - External library errors (database, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A request field failed boundary validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Booking rule violation or missing reference data.
    #[error(transparent)]
    BookingError(#[from] BookingError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Stored data is inconsistent with the schema's relations.
    ///
    /// Only occurs when foreign keys were not enforced by the backing store.
    #[error("Internal error, stored data is inconsistent: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing error (invalid cost, malformed stored digest).
    #[error(transparent)]
    HashError(#[from] bcrypt::BcryptError),
}
