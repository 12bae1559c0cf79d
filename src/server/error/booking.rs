use std::fmt;

use thiserror::Error;

/// Kind of reference data a booking request points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Train,
    Station,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Train => write!(f, "train"),
            Self::Station => write!(f, "station"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("No {kind} named {name:?} exists")]
    ReferenceNotFound { kind: ReferenceKind, name: String },
    #[error("Seat {seat_number} on train {train:?} is already booked")]
    SeatConflict { train: String, seat_number: i32 },
    #[error("Ticket ID {0} not found")]
    TicketNotFound(i32),
}

impl BookingError {
    pub(crate) fn train_not_found(name: &str) -> Self {
        Self::ReferenceNotFound {
            kind: ReferenceKind::Train,
            name: name.to_string(),
        }
    }

    pub(crate) fn station_not_found(name: &str) -> Self {
        Self::ReferenceNotFound {
            kind: ReferenceKind::Station,
            name: name.to_string(),
        }
    }
}
