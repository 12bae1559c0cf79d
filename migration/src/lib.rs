pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_city_table;
mod m20250101_000002_create_station_table;
mod m20250101_000003_create_train_table;
mod m20250101_000004_create_passenger_table;
mod m20250101_000005_create_user_table;
mod m20250101_000006_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_city_table::Migration),
            Box::new(m20250101_000002_create_station_table::Migration),
            Box::new(m20250101_000003_create_train_table::Migration),
            Box::new(m20250101_000004_create_passenger_table::Migration),
            Box::new(m20250101_000005_create_user_table::Migration),
            Box::new(m20250101_000006_create_ticket_table::Migration),
        ]
    }
}
