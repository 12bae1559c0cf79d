use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Fields of a ticket that a booking or an edit writes.
///
/// The cashier is not part of this set, it is stamped once at creation and kept on edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketFields {
    pub train_id: i32,
    pub departure_station_id: i32,
    pub arrival_station_id: i32,
    pub passenger_id: i32,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub seat_number: i32,
}

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new ticket
    pub async fn create(
        &self,
        fields: TicketFields,
        cashier_id: Option<i32>,
    ) -> Result<entity::ticket::Model, DbErr> {
        let ticket = entity::ticket::ActiveModel {
            train_id: ActiveValue::Set(fields.train_id),
            departure_station_id: ActiveValue::Set(fields.departure_station_id),
            arrival_station_id: ActiveValue::Set(fields.arrival_station_id),
            passenger_id: ActiveValue::Set(fields.passenger_id),
            cashier_id: ActiveValue::Set(cashier_id),
            departure_time: ActiveValue::Set(fields.departure_time),
            arrival_time: ActiveValue::Set(fields.arrival_time),
            seat_number: ActiveValue::Set(fields.seat_number),
            ..Default::default()
        };

        ticket.insert(self.db).await
    }

    /// Overwrites the mutable fields of an existing ticket
    ///
    /// Returns `Ok(None)` if no ticket has the provided ID.
    pub async fn update(
        &self,
        ticket_id: i32,
        fields: TicketFields,
    ) -> Result<Option<entity::ticket::Model>, DbErr> {
        let ticket = match self.find_by_id(ticket_id).await? {
            Some(ticket) => ticket,
            None => return Ok(None),
        };

        let mut ticket_am = ticket.into_active_model();
        ticket_am.train_id = ActiveValue::Set(fields.train_id);
        ticket_am.departure_station_id = ActiveValue::Set(fields.departure_station_id);
        ticket_am.arrival_station_id = ActiveValue::Set(fields.arrival_station_id);
        ticket_am.passenger_id = ActiveValue::Set(fields.passenger_id);
        ticket_am.departure_time = ActiveValue::Set(fields.departure_time);
        ticket_am.arrival_time = ActiveValue::Set(fields.arrival_time);
        ticket_am.seat_number = ActiveValue::Set(fields.seat_number);

        let ticket = ticket_am.update(self.db).await?;

        Ok(Some(ticket))
    }

    /// Finds a ticket by ID
    pub async fn find_by_id(&self, ticket_id: i32) -> Result<Option<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find_by_id(ticket_id)
            .one(self.db)
            .await
    }

    /// Finds a ticket holding `seat_number` on `train_id`
    ///
    /// When `exclude_ticket_id` is provided that ticket is ignored, letting an edit keep
    /// its own seat.
    pub async fn find_by_train_and_seat(
        &self,
        train_id: i32,
        seat_number: i32,
        exclude_ticket_id: Option<i32>,
    ) -> Result<Option<entity::ticket::Model>, DbErr> {
        let mut query = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::TrainId.eq(train_id))
            .filter(entity::ticket::Column::SeatNumber.eq(seat_number));

        if let Some(ticket_id) = exclude_ticket_id {
            query = query.filter(entity::ticket::Column::Id.ne(ticket_id));
        }

        query.one(self.db).await
    }

    /// Returns the seat numbers booked on `train_id`
    pub async fn occupied_seats(&self, train_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::SeatNumber)
            .filter(entity::ticket::Column::TrainId.eq(train_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Lists all tickets ordered by ID
    pub async fn list_all(&self) -> Result<Vec<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a ticket
    ///
    /// Returns OK regardless of ticket existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_id(&self, ticket_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ticket::delete_by_id(ticket_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use ticket_office_test_utils::prelude::*;

    use super::TicketFields;

    fn fields(train_id: i32, station_id: i32, passenger_id: i32, seat_number: i32) -> TicketFields {
        TicketFields {
            train_id,
            departure_station_id: station_id,
            arrival_station_id: station_id,
            passenger_id,
            departure_time: test_departure_time(),
            arrival_time: test_arrival_time(),
            seat_number,
        }
    }

    mod create {
        use sea_orm::SqlErr;
        use ticket_office_test_utils::prelude::*;

        use super::fields;
        use crate::server::data::ticket::TicketRepository;

        /// Expect success when all referenced rows exist
        #[tokio::test]
        async fn creates_ticket() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let train = test.reference().insert_train("Сапсан", 10).await?;
            let station = test.reference().insert_station("Московский вокзал").await?;
            let passenger = test.passenger().insert_passenger("1234", "567890").await?;
            let cashier = test.user().insert_user("cashier", false).await?;

            let ticket_repo = TicketRepository::new(&test.db);
            let ticket = ticket_repo
                .create(fields(train.id, station.id, passenger.id, 3), Some(cashier.id))
                .await?;

            assert_eq!(ticket.seat_number, 3);
            assert_eq!(ticket.cashier_id, Some(cashier.id));
            assert_eq!(ticket.departure_time, test_departure_time());

            Ok(())
        }

        /// Expect a unique constraint violation when the seat index rejects a duplicate
        #[tokio::test]
        async fn unique_index_rejects_duplicate_seat() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let (ticket, _, passenger) = test.ticket().insert_mock_ticket("Сапсан", 10, 5).await?;

            let ticket_repo = TicketRepository::new(&test.db);
            let result = ticket_repo
                .create(
                    fields(ticket.train_id, ticket.departure_station_id, passenger.id, 5),
                    None,
                )
                .await;

            let err = result.unwrap_err();
            assert!(matches!(
                err.sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
            ));

            Ok(())
        }

        /// Expect Error when the train does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_train() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let station = test.reference().insert_station("Московский вокзал").await?;
            let passenger = test.passenger().insert_passenger("1234", "567890").await?;

            let ticket_repo = TicketRepository::new(&test.db);
            let result = ticket_repo
                .create(fields(42, station.id, passenger.id, 1), None)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_train_and_seat {
        use ticket_office_test_utils::prelude::*;

        use crate::server::data::ticket::TicketRepository;

        /// Expect Ok(Some(_)) for a booked seat and Ok(None) for a free one
        #[tokio::test]
        async fn finds_booked_seat() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let (ticket, train, _) = test.ticket().insert_mock_ticket("Сапсан", 10, 5).await?;

            let ticket_repo = TicketRepository::new(&test.db);

            let booked = ticket_repo.find_by_train_and_seat(train.id, 5, None).await?;
            assert_eq!(booked.map(|t| t.id), Some(ticket.id));

            let free = ticket_repo.find_by_train_and_seat(train.id, 6, None).await?;
            assert!(free.is_none());

            Ok(())
        }

        /// Expect the excluded ticket to be ignored
        #[tokio::test]
        async fn ignores_excluded_ticket() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let (ticket, train, _) = test.ticket().insert_mock_ticket("Сапсан", 10, 5).await?;

            let ticket_repo = TicketRepository::new(&test.db);
            let result = ticket_repo
                .find_by_train_and_seat(train.id, 5, Some(ticket.id))
                .await?;

            assert!(result.is_none());

            Ok(())
        }

        /// Expect the same seat on another train not to match
        #[tokio::test]
        async fn scopes_seat_to_train() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            test.ticket().insert_mock_ticket("Сапсан", 10, 5).await?;
            let other_train = test.reference().insert_train("Ласточка", 10).await?;

            let ticket_repo = TicketRepository::new(&test.db);
            let result = ticket_repo
                .find_by_train_and_seat(other_train.id, 5, None)
                .await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod occupied_seats {
        use ticket_office_test_utils::prelude::*;

        use crate::server::data::ticket::TicketRepository;

        /// Expect only the seats booked on the requested train
        #[tokio::test]
        async fn returns_seats_for_train() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let (ticket, train, passenger) =
                test.ticket().insert_mock_ticket("Сапсан", 10, 2).await?;
            test.ticket()
                .insert_ticket(train.id, ticket.departure_station_id, passenger.id, 7)
                .await?;
            test.ticket().insert_mock_ticket("Ласточка", 10, 3).await?;

            let ticket_repo = TicketRepository::new(&test.db);
            let mut seats = ticket_repo.occupied_seats(train.id).await?;
            seats.sort_unstable();

            assert_eq!(seats, vec![2, 7]);

            Ok(())
        }
    }

    mod update {
        use ticket_office_test_utils::prelude::*;

        use super::fields;
        use crate::server::data::ticket::TicketRepository;

        /// Expect fields to be overwritten while ID and cashier stay
        #[tokio::test]
        async fn updates_existing_ticket() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let (ticket, train, passenger) =
                test.ticket().insert_mock_ticket("Сапсан", 10, 2).await?;

            let ticket_repo = TicketRepository::new(&test.db);
            let result = ticket_repo
                .update(
                    ticket.id,
                    fields(train.id, ticket.departure_station_id, passenger.id, 9),
                )
                .await?;

            let updated = result.unwrap();
            assert_eq!(updated.id, ticket.id);
            assert_eq!(updated.seat_number, 9);
            assert_eq!(updated.cashier_id, ticket.cashier_id);

            Ok(())
        }

        /// Expect Ok(None) when the ticket does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_ticket() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let (ticket, train, passenger) =
                test.ticket().insert_mock_ticket("Сапсан", 10, 2).await?;

            let ticket_repo = TicketRepository::new(&test.db);
            let result = ticket_repo
                .update(
                    ticket.id + 1,
                    fields(train.id, ticket.departure_station_id, passenger.id, 9),
                )
                .await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod delete_by_id {
        use ticket_office_test_utils::prelude::*;

        use crate::server::data::ticket::TicketRepository;

        /// Expect one row affected for an existing ticket, none afterwards
        #[tokio::test]
        async fn deletes_existing_ticket() -> Result<(), TestError> {
            let test = test_setup_with_booking_tables!()?;
            let (ticket, _, _) = test.ticket().insert_mock_ticket("Сапсан", 10, 2).await?;

            let ticket_repo = TicketRepository::new(&test.db);

            let first = ticket_repo.delete_by_id(ticket.id).await?;
            assert_eq!(first.rows_affected, 1);
            assert!(ticket_repo.find_by_id(ticket.id).await?.is_none());

            let second = ticket_repo.delete_by_id(ticket.id).await?;
            assert_eq!(second.rows_affected, 0);

            Ok(())
        }
    }
}
