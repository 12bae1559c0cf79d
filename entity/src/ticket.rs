use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub train_id: i32,
    pub departure_station_id: i32,
    pub arrival_station_id: i32,
    pub passenger_id: i32,
    /// User who sold the ticket, absent for self-service bookings
    pub cashier_id: Option<i32>,
    pub departure_time: DateTime,
    pub arrival_time: DateTime,
    pub seat_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::train::Entity",
        from = "Column::TrainId",
        to = "super::train::Column::Id"
    )]
    Train,
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::DepartureStationId",
        to = "super::station::Column::Id"
    )]
    DepartureStation,
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::ArrivalStationId",
        to = "super::station::Column::Id"
    )]
    ArrivalStation,
    #[sea_orm(
        belongs_to = "super::passenger::Entity",
        from = "Column::PassengerId",
        to = "super::passenger::Column::Id"
    )]
    Passenger,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CashierId",
        to = "super::user::Column::Id"
    )]
    Cashier,
}

impl Related<super::train::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Train.def()
    }
}

impl Related<super::passenger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passenger.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cashier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
