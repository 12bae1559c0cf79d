//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. Each is generic over [`sea_orm::ConnectionTrait`]
//! so services can run them on the shared connection for reads or inside a
//! [`sea_orm::DatabaseTransaction`] when an operation must commit or roll back as a unit.

pub mod passenger;
pub mod reference;
pub mod ticket;
pub mod user;
