//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate so signatures across the data
//! and service layers stay readable.

/// City a station belongs to.
pub type CityModel = entity::city::Model;

/// Station referenced as a ticket's departure or arrival point.
///
/// # Fields (from `entity::station::Model`)
/// - `id` - Primary key
/// - `name` - Unique station name
/// - `city_id` - Foreign key to the station's city
pub type StationModel = entity::station::Model;

/// Train with a fixed seat capacity.
///
/// # Fields (from `entity::train::Model`)
/// - `id` - Primary key
/// - `name` - Unique train name
/// - `total_seats` - Number of seats, numbered from 1
pub type TrainModel = entity::train::Model;

/// Passenger keyed by passport series & number.
pub type PassengerModel = entity::passenger::Model;

/// Account used for login and as the cashier on sold tickets.
pub type UserModel = entity::user::Model;

/// Seat assignment binding a passenger to a train, seat, station pair and time pair.
///
/// # Fields (from `entity::ticket::Model`)
/// - `id` - Primary key
/// - `train_id` - Foreign key to the train
/// - `departure_station_id` / `arrival_station_id` - Foreign keys to stations
/// - `passenger_id` - Foreign key to the passenger
/// - `cashier_id` - Foreign key to the selling user (nullable)
/// - `departure_time` / `arrival_time` - Stored exactly as supplied
/// - `seat_number` - Unique per train
pub type TicketModel = entity::ticket::Model;
