use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn reference(&self) -> ReferenceFixtures<'_> {
        ReferenceFixtures { setup: self }
    }
}

pub struct ReferenceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReferenceFixtures<'a> {
    pub async fn insert_city(&self, name: &str) -> Result<entity::city::Model, TestError> {
        Ok(entity::prelude::City::insert(entity::city::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a station along with a city sharing its name
    pub async fn insert_station(&self, name: &str) -> Result<entity::station::Model, TestError> {
        let city = self.insert_city(name).await?;

        Ok(entity::prelude::Station::insert(entity::station::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            city_id: ActiveValue::Set(city.id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_train(
        &self,
        name: &str,
        total_seats: i32,
    ) -> Result<entity::train::Model, TestError> {
        Ok(entity::prelude::Train::insert(entity::train::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            total_seats: ActiveValue::Set(total_seats),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
