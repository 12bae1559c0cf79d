use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct CityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    /// Creates a new instance of [`CityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::city::Model, DbErr> {
        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        city.insert(self.db).await
    }

    /// Lists all cities in insertion order
    pub async fn list_all(&self) -> Result<Vec<entity::city::Model>, DbErr> {
        entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn is_empty(&self) -> Result<bool, DbErr> {
        Ok(entity::prelude::City::find().one(self.db).await?.is_none())
    }
}
