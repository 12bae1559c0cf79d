//! Service layer for business logic.
//!
//! Services validate requests, coordinate repositories, and scope one database transaction
//! per logical write operation so validation and persistence commit or roll back together.
//! Includes the reference catalog, passenger registry, booking engine, cashier accounts and
//! the export projection.

#![warn(missing_docs)]

pub mod account;
pub mod booking;
pub mod export;
pub mod passenger;
pub mod reference;
