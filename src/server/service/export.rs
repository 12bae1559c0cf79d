//! Read-only tabular projection of all tickets.
//!
//! Related rows are batch-loaded per table rather than per ticket, then joined in memory.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::{
    model::ticket::TicketRowDto,
    server::{
        data::{
            passenger::PassengerRepository,
            reference::{station::StationRepository, train::TrainRepository},
            ticket::TicketRepository,
            user::UserRepository,
        },
        error::Error,
    },
};

/// Service projecting stored tickets into export rows.
pub struct ExportService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExportService<'a, C> {
    /// Creates a new instance of [`ExportService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns one row per ticket, ordered by ticket ID.
    ///
    /// # Returns
    /// - `Ok(Vec<TicketRowDto>)` - Rows for every stored ticket
    /// - `Err(Error::InternalError)` - A ticket references a missing train, station,
    ///   passenger or cashier
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn ticket_rows(&self) -> Result<Vec<TicketRowDto>, Error> {
        let tickets = TicketRepository::new(self.db).list_all().await?;
        if tickets.is_empty() {
            return Ok(Vec::new());
        }

        let train_ids = unique_ids(tickets.iter().map(|t| t.train_id));
        let station_ids = unique_ids(
            tickets
                .iter()
                .flat_map(|t| [t.departure_station_id, t.arrival_station_id]),
        );
        let passenger_ids = unique_ids(tickets.iter().map(|t| t.passenger_id));
        let cashier_ids = unique_ids(tickets.iter().filter_map(|t| t.cashier_id));

        let trains: HashMap<i32, _> = TrainRepository::new(self.db)
            .find_by_ids(train_ids)
            .await?
            .into_iter()
            .map(|train| (train.id, train))
            .collect();
        let stations: HashMap<i32, _> = StationRepository::new(self.db)
            .find_by_ids(station_ids)
            .await?
            .into_iter()
            .map(|station| (station.id, station))
            .collect();
        let passengers: HashMap<i32, _> = PassengerRepository::new(self.db)
            .find_by_ids(passenger_ids)
            .await?
            .into_iter()
            .map(|passenger| (passenger.id, passenger))
            .collect();
        let cashiers: HashMap<i32, _> = if cashier_ids.is_empty() {
            HashMap::new()
        } else {
            UserRepository::new(self.db)
                .find_by_ids(cashier_ids)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        };

        tickets
            .into_iter()
            .map(|ticket| -> Result<TicketRowDto, Error> {
                // Only reachable if foreign keys were not enforced by the backing store
                let missing = |what: &str, id: i32| {
                    Error::InternalError(format!(
                        "Ticket ID {} references missing {} ID {}",
                        ticket.id, what, id
                    ))
                };

                let train = trains
                    .get(&ticket.train_id)
                    .ok_or_else(|| missing("train", ticket.train_id))?;
                let departure = stations
                    .get(&ticket.departure_station_id)
                    .ok_or_else(|| missing("station", ticket.departure_station_id))?;
                let arrival = stations
                    .get(&ticket.arrival_station_id)
                    .ok_or_else(|| missing("station", ticket.arrival_station_id))?;
                let passenger = passengers
                    .get(&ticket.passenger_id)
                    .ok_or_else(|| missing("passenger", ticket.passenger_id))?;
                let cashier = match ticket.cashier_id {
                    None => None,
                    Some(cashier_id) => Some(
                        cashiers
                            .get(&cashier_id)
                            .ok_or_else(|| missing("cashier", cashier_id))?
                            .username
                            .clone(),
                    ),
                };

                Ok(TicketRowDto {
                    ticket_id: ticket.id,
                    last_name: passenger.last_name.clone(),
                    first_name: passenger.first_name.clone(),
                    middle_name: passenger.middle_name.clone(),
                    passport_series: passenger.passport_series.clone(),
                    passport_number: passenger.passport_number.clone(),
                    train_name: train.name.clone(),
                    departure_station: departure.name.clone(),
                    arrival_station: arrival.name.clone(),
                    departure_time: ticket.departure_time,
                    arrival_time: ticket.arrival_time,
                    seat_number: ticket.seat_number,
                    cashier,
                })
            })
            .collect()
    }
}

fn unique_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();

    ids
}
