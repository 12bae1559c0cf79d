//! Fixture helpers for inserting test data.
//!
//! - `reference` - cities, stations and trains
//! - `passenger` - passenger records keyed by passport
//! - `ticket` - tickets and the default travel times used by tests
//! - `user` - accounts with a known password

pub mod passenger;
pub mod reference;
pub mod ticket;
pub mod user;
