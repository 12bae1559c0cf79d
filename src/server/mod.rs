//! Ticket office core modules.
//!
//! This module contains the booking core of the ticket office: the reference data catalog
//! (cities, stations, trains), the passenger registry, the seat-allocating booking engine,
//! cashier accounts, and the read-only export projection. Callers (the desktop front end)
//! drive these services through a synchronous request/response surface and never touch
//! storage directly.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
