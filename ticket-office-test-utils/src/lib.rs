//! Test harness for the ticket office workspace.
//!
//! Tests build an in-memory SQLite database through [`TestBuilder`] (or the
//! `test_setup_with_*` macros), then use the returned [`TestContext`] and its fixture
//! helpers to insert reference data, passengers, users and tickets.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::ticket::{test_arrival_time, test_departure_time},
        test_setup_with_booking_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}
