use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct TrainRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainRepository<'a, C> {
    /// Creates a new instance of [`TrainRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        total_seats: i32,
    ) -> Result<entity::train::Model, DbErr> {
        let train = entity::train::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            total_seats: ActiveValue::Set(total_seats),
            ..Default::default()
        };

        train.insert(self.db).await
    }

    /// Lists all trains in insertion order
    pub async fn list_all(&self) -> Result<Vec<entity::train::Model>, DbErr> {
        entity::prelude::Train::find()
            .order_by_asc(entity::train::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a train by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::train::Model>, DbErr> {
        entity::prelude::Train::find()
            .filter(entity::train::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::train::Model>, DbErr> {
        entity::prelude::Train::find()
            .filter(entity::train::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn is_empty(&self) -> Result<bool, DbErr> {
        Ok(entity::prelude::Train::find().one(self.db).await?.is_none())
    }
}
