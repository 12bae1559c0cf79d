//! Standalone helpers shared by the service layer.
//!
//! - `password` - one-way credential hashing behind a cost-tunable bcrypt hasher
//! - `seat` - seat number parsing and free seat computation

pub mod password;
pub mod seat;
