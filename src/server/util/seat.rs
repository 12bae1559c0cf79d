use std::collections::BTreeSet;

use crate::server::error::validation::ValidationError;

/// Parses a raw seat number for a train with `total_seats` seats.
///
/// Seats are numbered from 1 through `total_seats` inclusive.
pub fn parse_seat_number(raw: &str, total_seats: i32) -> Result<i32, ValidationError> {
    let seat_number: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::field("seat"))?;

    if seat_number < 1 || seat_number > total_seats {
        return Err(ValidationError::field("seat"));
    }

    Ok(seat_number)
}

/// Returns `{1..=total_seats} \ occupied` in ascending order.
pub fn available_seats<I>(total_seats: i32, occupied: I) -> BTreeSet<i32>
where
    I: IntoIterator<Item = i32>,
{
    let mut seats: BTreeSet<i32> = (1..=total_seats).collect();
    for seat_number in occupied {
        seats.remove(&seat_number);
    }

    seats
}
