//! Data transfer objects shared with callers of the ticket office core.

pub mod ticket;
