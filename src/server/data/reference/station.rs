use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct StationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StationRepository<'a, C> {
    /// Creates a new instance of [`StationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        city_id: i32,
    ) -> Result<entity::station::Model, DbErr> {
        let station = entity::station::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            city_id: ActiveValue::Set(city_id),
            ..Default::default()
        };

        station.insert(self.db).await
    }

    /// Lists all stations in insertion order
    pub async fn list_all(&self) -> Result<Vec<entity::station::Model>, DbErr> {
        entity::prelude::Station::find()
            .order_by_asc(entity::station::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a station by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::station::Model>, DbErr> {
        entity::prelude::Station::find()
            .filter(entity::station::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::station::Model>, DbErr> {
        entity::prelude::Station::find()
            .filter(entity::station::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn is_empty(&self) -> Result<bool, DbErr> {
        Ok(entity::prelude::Station::find()
            .one(self.db)
            .await?
            .is_none())
    }
}
