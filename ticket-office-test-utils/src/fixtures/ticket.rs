use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Departure time used by ticket fixtures, 2025-03-01 08:30.
pub fn test_departure_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|date| date.and_hms_opt(8, 30, 0))
        .unwrap_or_default()
}

/// Arrival time used by ticket fixtures, 2025-03-01 12:45.
pub fn test_arrival_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|date| date.and_hms_opt(12, 45, 0))
        .unwrap_or_default()
}

impl TestContext {
    pub fn ticket(&self) -> TicketFixtures<'_> {
        TicketFixtures { setup: self }
    }
}

pub struct TicketFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TicketFixtures<'a> {
    /// Insert a ticket departing from and arriving at `station_id`, without a cashier
    pub async fn insert_ticket(
        &self,
        train_id: i32,
        station_id: i32,
        passenger_id: i32,
        seat_number: i32,
    ) -> Result<entity::ticket::Model, TestError> {
        Ok(entity::prelude::Ticket::insert(entity::ticket::ActiveModel {
            train_id: ActiveValue::Set(train_id),
            departure_station_id: ActiveValue::Set(station_id),
            arrival_station_id: ActiveValue::Set(station_id),
            passenger_id: ActiveValue::Set(passenger_id),
            cashier_id: ActiveValue::Set(None),
            departure_time: ActiveValue::Set(test_departure_time()),
            arrival_time: ActiveValue::Set(test_arrival_time()),
            seat_number: ActiveValue::Set(seat_number),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a train, station & passenger then book `seat_number` on that train
    pub async fn insert_mock_ticket(
        &self,
        train_name: &str,
        total_seats: i32,
        seat_number: i32,
    ) -> Result<
        (
            entity::ticket::Model,
            entity::train::Model,
            entity::passenger::Model,
        ),
        TestError,
    > {
        let train = self
            .setup
            .reference()
            .insert_train(train_name, total_seats)
            .await?;
        let station = self
            .setup
            .reference()
            .insert_station(&format!("{train_name} station"))
            .await?;
        let passenger = self
            .setup
            .passenger()
            .insert_passenger("1000", &format!("{:06}", train.id))
            .await?;

        let ticket = self
            .insert_ticket(train.id, station.id, passenger.id, seat_number)
            .await?;

        Ok((ticket, train, passenger))
    }
}
