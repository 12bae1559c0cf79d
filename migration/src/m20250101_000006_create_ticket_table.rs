use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250101_000002_create_station_table::Station, m20250101_000003_create_train_table::Train,
    m20250101_000004_create_passenger_table::Passenger, m20250101_000005_create_user_table::User,
};

static FK_TICKET_TRAIN_ID: &str = "fk_tickets_train_id";
static FK_TICKET_DEPARTURE_STATION_ID: &str = "fk_tickets_departure_station_id";
static FK_TICKET_ARRIVAL_STATION_ID: &str = "fk_tickets_arrival_station_id";
static FK_TICKET_PASSENGER_ID: &str = "fk_tickets_passenger_id";
static FK_TICKET_CASHIER_ID: &str = "fk_tickets_cashier_id";
// Last-resort guard against two sessions booking the same seat concurrently
static IDX_TICKET_TRAIN_SEAT: &str = "idx_tickets_train_id_seat_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::TrainId))
                    .col(integer(Ticket::DepartureStationId))
                    .col(integer(Ticket::ArrivalStationId))
                    .col(integer(Ticket::PassengerId))
                    .col(integer_null(Ticket::CashierId))
                    .col(timestamp(Ticket::DepartureTime))
                    .col(timestamp(Ticket::ArrivalTime))
                    .col(integer(Ticket::SeatNumber))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_TRAIN_ID)
                            .from(Ticket::Table, Ticket::TrainId)
                            .to(Train::Table, Train::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_DEPARTURE_STATION_ID)
                            .from(Ticket::Table, Ticket::DepartureStationId)
                            .to(Station::Table, Station::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_ARRIVAL_STATION_ID)
                            .from(Ticket::Table, Ticket::ArrivalStationId)
                            .to(Station::Table, Station::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_PASSENGER_ID)
                            .from(Ticket::Table, Ticket::PassengerId)
                            .to(Passenger::Table, Passenger::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_CASHIER_ID)
                            .from(Ticket::Table, Ticket::CashierId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_TRAIN_SEAT)
                    .table(Ticket::Table)
                    .col(Ticket::TrainId)
                    .col(Ticket::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_TRAIN_SEAT)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ticket {
    #[sea_orm(iden = "tickets")]
    Table,
    Id,
    TrainId,
    DepartureStationId,
    ArrivalStationId,
    PassengerId,
    CashierId,
    DepartureTime,
    ArrivalTime,
    SeatNumber,
}
