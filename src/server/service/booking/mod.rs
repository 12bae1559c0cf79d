//! Booking engine.
//!
//! Turns ticket requests into persisted tickets while guaranteeing that a seat on a train is
//! held by at most one ticket. Every write runs in its own database transaction: reference
//! resolution, seat checks, passenger registration and the ticket write commit together, so
//! a request that fails at any step leaves no partial rows behind.
//!
//! The seat check is done in application code first so callers get a readable
//! [`BookingError::SeatConflict`]. The unique `(train_id, seat_number)` index on the ticket
//! table backs it up for concurrent writers, its violation maps to the same error.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::ticket::{TicketFields, TicketRepository},
    error::{booking::BookingError, Error},
    model::{
        db::{TicketModel, TrainModel},
        session::Principal,
        ticket::TicketRequest,
    },
    service::{passenger::PassengerRegistry, reference::ReferenceDataService},
    util::seat::{available_seats, parse_seat_number},
};

/// Service for booking, editing and cancelling tickets.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a ticket.
    ///
    /// Resolves the train, validates the seat against the train's capacity, rejects the seat
    /// if another ticket on the same train holds it, finds or registers the passenger by
    /// passport, resolves both stations, then stores the ticket stamped with the request's
    /// cashier. Failures are reported in that order.
    ///
    /// # Returns
    /// - `Ok(TicketModel)` - Ticket stored
    /// - `Err(Error::BookingError(ReferenceNotFound))` - Unknown train or station
    /// - `Err(Error::ValidationError)` - Seat not a number within `1..=total_seats`
    /// - `Err(Error::BookingError(SeatConflict))` - Seat already booked on this train
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was stored
    pub async fn create_ticket(&self, request: TicketRequest) -> Result<TicketModel, Error> {
        let txn = self.db.begin().await?;

        let (train, fields) = resolve_ticket_fields(&txn, &request, None).await?;
        let seat_number = fields.seat_number;

        let ticket = TicketRepository::new(&txn)
            .create(fields, request.cashier_id)
            .await
            .map_err(|e| seat_conflict_or_db_err(e, &train, seat_number))?;

        txn.commit().await?;

        tracing::info!(
            ticket_id = ticket.id,
            train = %train.name,
            seat_number,
            cashier_id = ?ticket.cashier_id,
            "Booked ticket"
        );

        Ok(ticket)
    }

    /// Replaces the train, stations, times, seat and passenger of an existing ticket.
    ///
    /// Requires an administrator. The request goes through the same resolution and seat
    /// checks as [`Self::create_ticket`], except the ticket being edited does not conflict
    /// with its own seat. The cashier who sold the ticket is kept.
    ///
    /// # Returns
    /// - `Ok(TicketModel)` - Ticket updated
    /// - `Err(Error::AuthError(Unauthorized))` - Principal is not an administrator
    /// - `Err(Error::BookingError(TicketNotFound))` - No ticket has this ID
    /// - Any error [`Self::create_ticket`] reports for the request itself
    pub async fn edit_ticket(
        &self,
        principal: &Principal,
        ticket_id: i32,
        request: TicketRequest,
    ) -> Result<TicketModel, Error> {
        principal.require_admin().inspect_err(|_| {
            tracing::debug!(
                ticket_id,
                username = %principal.username,
                "Rejected ticket edit by non-admin"
            )
        })?;

        let txn = self.db.begin().await?;
        let ticket_repo = TicketRepository::new(&txn);

        if ticket_repo.find_by_id(ticket_id).await?.is_none() {
            return Err(BookingError::TicketNotFound(ticket_id).into());
        }

        let (train, fields) = resolve_ticket_fields(&txn, &request, Some(ticket_id)).await?;
        let seat_number = fields.seat_number;

        let ticket = ticket_repo
            .update(ticket_id, fields)
            .await
            .map_err(|e| seat_conflict_or_db_err(e, &train, seat_number))?
            .ok_or(BookingError::TicketNotFound(ticket_id))?;

        txn.commit().await?;

        tracing::info!(
            ticket_id,
            editor = %principal.username,
            train = %train.name,
            seat_number,
            "Edited ticket"
        );

        Ok(ticket)
    }

    /// Deletes a ticket, freeing its seat.
    ///
    /// Requires an administrator. The passenger record is kept.
    ///
    /// # Returns
    /// - `Ok(())` - Ticket deleted
    /// - `Err(Error::AuthError(Unauthorized))` - Principal is not an administrator
    /// - `Err(Error::BookingError(TicketNotFound))` - No ticket has this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_ticket(&self, principal: &Principal, ticket_id: i32) -> Result<(), Error> {
        principal.require_admin().inspect_err(|_| {
            tracing::debug!(
                ticket_id,
                username = %principal.username,
                "Rejected ticket deletion by non-admin"
            )
        })?;

        let result = TicketRepository::new(self.db).delete_by_id(ticket_id).await?;
        if result.rows_affected == 0 {
            return Err(BookingError::TicketNotFound(ticket_id).into());
        }

        tracing::info!(ticket_id, editor = %principal.username, "Deleted ticket");

        Ok(())
    }

    /// Returns the seats of a train not held by any ticket, in ascending order.
    ///
    /// # Returns
    /// - `Ok(BTreeSet<i32>)` - Free seats within `1..=total_seats`
    /// - `Err(Error::BookingError(ReferenceNotFound))` - Unknown train
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn available_seats(&self, train_name: &str) -> Result<BTreeSet<i32>, Error> {
        let train = ReferenceDataService::new(self.db)
            .find_train_by_name(train_name)
            .await?;
        let occupied = TicketRepository::new(self.db)
            .occupied_seats(train.id)
            .await?;

        Ok(available_seats(train.total_seats, occupied))
    }

    /// Lists every stored ticket ordered by ID.
    pub async fn list_tickets(&self) -> Result<Vec<TicketModel>, Error> {
        Ok(TicketRepository::new(self.db).list_all().await?)
    }

    /// Returns the ticket with the provided ID, if any.
    pub async fn get_ticket(&self, ticket_id: i32) -> Result<Option<TicketModel>, Error> {
        Ok(TicketRepository::new(self.db).find_by_id(ticket_id).await?)
    }
}

/// Runs the shared validation pipeline of create & edit.
///
/// `exclude_ticket_id` is the ticket being edited, it never conflicts with itself.
async fn resolve_ticket_fields<C: ConnectionTrait>(
    db: &C,
    request: &TicketRequest,
    exclude_ticket_id: Option<i32>,
) -> Result<(TrainModel, TicketFields), Error> {
    let reference_service = ReferenceDataService::new(db);

    let train = reference_service
        .find_train_by_name(&request.train_name)
        .await?;

    let seat_number = parse_seat_number(&request.seat_number, train.total_seats)?;

    if TicketRepository::new(db)
        .find_by_train_and_seat(train.id, seat_number, exclude_ticket_id)
        .await?
        .is_some()
    {
        tracing::debug!(train = %train.name, seat_number, "Rejected booking of taken seat");

        return Err(BookingError::SeatConflict {
            train: train.name,
            seat_number,
        }
        .into());
    }

    let passenger = PassengerRegistry::new(db)
        .find_or_create(&request.passenger)
        .await?;

    let departure_station = reference_service
        .find_station_by_name(&request.departure_station_name)
        .await?;
    let arrival_station = reference_service
        .find_station_by_name(&request.arrival_station_name)
        .await?;

    let fields = TicketFields {
        train_id: train.id,
        departure_station_id: departure_station.id,
        arrival_station_id: arrival_station.id,
        passenger_id: passenger.id,
        departure_time: request.departure_time,
        arrival_time: request.arrival_time,
        seat_number,
    };

    Ok((train, fields))
}

/// Maps a unique index violation on a ticket write to a seat conflict.
fn seat_conflict_or_db_err(err: DbErr, train: &TrainModel, seat_number: i32) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => BookingError::SeatConflict {
            train: train.name.clone(),
            seat_number,
        }
        .into(),
        _ => err.into(),
    }
}
