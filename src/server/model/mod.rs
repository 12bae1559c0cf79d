//! Core-side models.
//!
//! - `db` - type aliases over the generated entity models
//! - `session` - the authenticated principal stamped on tickets
//! - `ticket` - validated booking request value objects
//! - `account` - registration request value object

pub mod account;
pub mod db;
pub mod session;
pub mod ticket;
