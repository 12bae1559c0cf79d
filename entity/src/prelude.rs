pub use super::city::Entity as City;
pub use super::passenger::Entity as Passenger;
pub use super::station::Entity as Station;
pub use super::ticket::Entity as Ticket;
pub use super::train::Entity as Train;
pub use super::user::Entity as User;
