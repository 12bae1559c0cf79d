//! Passenger registry.
//!
//! Passengers are identified by passport alone: the first booking for a passport creates
//! the record and every later booking reuses it, ignoring the names supplied with the later
//! request.

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::passenger::PassengerRepository,
    error::Error,
    model::{db::PassengerModel, ticket::PassengerIdentity},
};

/// Service resolving passengers by passport.
pub struct PassengerRegistry<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRegistry<'a, C> {
    /// Creates a new instance of [`PassengerRegistry`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the passenger holding the identity's passport, creating one if none exists.
    ///
    /// An existing passenger is returned unchanged, names on `identity` are only used when a
    /// new record is created.
    ///
    /// # Returns
    /// - `Ok(PassengerModel)` - Existing or newly created passenger
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_or_create(
        &self,
        identity: &PassengerIdentity,
    ) -> Result<PassengerModel, Error> {
        let passenger_repo = PassengerRepository::new(self.db);

        if let Some(passenger) = passenger_repo
            .find_by_passport(identity.passport_series(), identity.passport_number())
            .await?
        {
            return Ok(passenger);
        }

        let passenger = passenger_repo.create(identity).await?;
        tracing::debug!(passenger_id = passenger.id, "Registered new passenger");

        Ok(passenger)
    }
}

#[cfg(test)]
mod tests {
    use ticket_office_test_utils::prelude::*;

    use crate::server::{model::ticket::PassengerIdentity, service::passenger::PassengerRegistry};

    /// Expect a new passenger when the passport is unknown
    #[tokio::test]
    async fn creates_passenger_for_new_passport() -> Result<(), TestError> {
        let test = test_setup_with_booking_tables!()?;
        let identity =
            PassengerIdentity::new("Olga", "Sidorova", Some("Petrovna"), "4510", "123456")
                .unwrap();

        let registry = PassengerRegistry::new(&test.db);
        let passenger = registry.find_or_create(&identity).await.unwrap();

        assert_eq!(passenger.first_name, "Olga");
        assert_eq!(passenger.middle_name.as_deref(), Some("Petrovna"));

        Ok(())
    }

    /// Expect the same passenger regardless of differing names on the second call
    #[tokio::test]
    async fn reuses_passenger_for_known_passport() -> Result<(), TestError> {
        let test = test_setup_with_booking_tables!()?;
        let first = PassengerIdentity::new("Olga", "Sidorova", None, "4510", "123456").unwrap();
        let second = PassengerIdentity::new("Helga", "Smith", None, "4510", "123456").unwrap();

        let registry = PassengerRegistry::new(&test.db);
        let created = registry.find_or_create(&first).await.unwrap();
        let found = registry.find_or_create(&second).await.unwrap();

        assert_eq!(created.id, found.id);
        // Identity comes from the passport, names are not updated
        assert_eq!(found.first_name, "Olga");
        assert_eq!(found.last_name, "Sidorova");

        Ok(())
    }

    /// Expect distinct passengers for passports differing only in series
    #[tokio::test]
    async fn distinguishes_passports_by_series() -> Result<(), TestError> {
        let test = test_setup_with_booking_tables!()?;
        let first = PassengerIdentity::new("Olga", "Sidorova", None, "4510", "123456").unwrap();
        let second = PassengerIdentity::new("Olga", "Sidorova", None, "4511", "123456").unwrap();

        let registry = PassengerRegistry::new(&test.db);
        let a = registry.find_or_create(&first).await.unwrap();
        let b = registry.find_or_create(&second).await.unwrap();

        assert_ne!(a.id, b.id);

        Ok(())
    }

    /// Expect Error when the passenger table is missing
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let identity = PassengerIdentity::new("Olga", "Sidorova", None, "4510", "123456").unwrap();

        let registry = PassengerRegistry::new(&test.db);
        let result = registry.find_or_create(&identity).await;

        assert!(matches!(result, Err(crate::server::error::Error::DbErr(_))));

        Ok(())
    }
}
