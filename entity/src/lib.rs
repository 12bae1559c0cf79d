//! SeaORM entities for the ticket office schema.

pub mod prelude;

pub mod city;
pub mod passenger;
pub mod station;
pub mod ticket;
pub mod train;
pub mod user;
