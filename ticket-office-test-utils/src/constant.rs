//! Constants shared by fixtures and tests.

/// bcrypt cost used for fixture passwords.
///
/// The minimum cost bcrypt accepts, keeping password fixtures fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Plaintext password given to every fixture user.
pub static TEST_PASSWORD: &str = "password";

/// Name of the unique index on `tickets(train_id, seat_number)`.
pub static IDX_TICKET_TRAIN_SEAT: &str = "idx_tickets_train_id_seat_number";

/// Name of the unique index on `passengers(passport_series, passport_number)`.
pub static IDX_PASSENGER_PASSPORT: &str = "idx_passengers_passport";
