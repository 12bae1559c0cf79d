use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::ticket::PassengerIdentity;

pub struct PassengerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRepository<'a, C> {
    /// Creates a new instance of [`PassengerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a passenger from a validated identity
    pub async fn create(
        &self,
        identity: &PassengerIdentity,
    ) -> Result<entity::passenger::Model, DbErr> {
        let passenger = entity::passenger::ActiveModel {
            first_name: ActiveValue::Set(identity.first_name().to_string()),
            last_name: ActiveValue::Set(identity.last_name().to_string()),
            middle_name: ActiveValue::Set(identity.middle_name().map(str::to_string)),
            passport_series: ActiveValue::Set(identity.passport_series().to_string()),
            passport_number: ActiveValue::Set(identity.passport_number().to_string()),
            ..Default::default()
        };

        passenger.insert(self.db).await
    }

    /// Finds the passenger holding exactly this passport series & number
    pub async fn find_by_passport(
        &self,
        passport_series: &str,
        passport_number: &str,
    ) -> Result<Option<entity::passenger::Model>, DbErr> {
        entity::prelude::Passenger::find()
            .filter(entity::passenger::Column::PassportSeries.eq(passport_series))
            .filter(entity::passenger::Column::PassportNumber.eq(passport_number))
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::passenger::Model>, DbErr> {
        entity::prelude::Passenger::find()
            .filter(entity::passenger::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
