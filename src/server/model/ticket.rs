use chrono::NaiveDateTime;

use crate::server::error::validation::ValidationError;

const PASSPORT_SERIES_LEN: usize = 4;
const PASSPORT_NUMBER_LEN: usize = 6;

/// Passenger details entered for a booking.
///
/// Construction validates the fields, so a value of this type always carries non-empty
/// first & last names, a 4-digit passport series and a 6-digit passport number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerIdentity {
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    passport_series: String,
    passport_number: String,
}

impl PassengerIdentity {
    /// Validates and builds a passenger identity.
    ///
    /// Surrounding whitespace is trimmed and an empty middle name is treated as absent.
    ///
    /// # Returns
    /// - `Ok(PassengerIdentity)` - All fields valid
    /// - `Err(ValidationError::InvalidInput)` - Names empty or passport fields malformed,
    ///   `field` names the first offending field
    pub fn new(
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
        passport_series: &str,
        passport_number: &str,
    ) -> Result<Self, ValidationError> {
        let first_name = required(first_name, "first_name")?;
        let last_name = required(last_name, "last_name")?;
        let middle_name = middle_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let passport_series = digits(passport_series, PASSPORT_SERIES_LEN, "passport_series")?;
        let passport_number = digits(passport_number, PASSPORT_NUMBER_LEN, "passport_number")?;

        Ok(Self {
            first_name,
            last_name,
            middle_name,
            passport_series,
            passport_number,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn passport_series(&self) -> &str {
        &self.passport_series
    }

    pub fn passport_number(&self) -> &str {
        &self.passport_number
    }
}

/// Input for creating or editing a ticket.
///
/// Train and stations are referenced by name as picked in the booking form. The seat number
/// is kept raw, the booking engine parses it against the resolved train's capacity. Times
/// are stored as supplied, arrival is not required to follow departure.
#[derive(Debug, Clone)]
pub struct TicketRequest {
    pub train_name: String,
    pub departure_station_name: String,
    pub arrival_station_name: String,
    pub seat_number: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub passenger: PassengerIdentity,
    /// Selling user, `None` for self-service bookings
    pub cashier_id: Option<i32>,
}

pub(crate) fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::field(field));
    }

    Ok(value.to_string())
}

fn digits(value: &str, len: usize, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::field(field));
    }

    Ok(value.to_string())
}
