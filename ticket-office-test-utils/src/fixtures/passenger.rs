use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn passenger(&self) -> PassengerFixtures<'_> {
        PassengerFixtures { setup: self }
    }
}

pub struct PassengerFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PassengerFixtures<'a> {
    /// Insert a passenger named "Ivan Ivanovich Ivanov" holding the given passport
    pub async fn insert_passenger(
        &self,
        passport_series: &str,
        passport_number: &str,
    ) -> Result<entity::passenger::Model, TestError> {
        Ok(
            entity::prelude::Passenger::insert(entity::passenger::ActiveModel {
                first_name: ActiveValue::Set("Ivan".to_string()),
                last_name: ActiveValue::Set("Ivanov".to_string()),
                middle_name: ActiveValue::Set(Some("Ivanovich".to_string())),
                passport_series: ActiveValue::Set(passport_series.to_string()),
                passport_number: ActiveValue::Set(passport_number.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
