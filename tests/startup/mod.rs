//! Startup against a migrated in-memory database.

use sea_orm::{EntityTrait, PaginatorTrait};
use ticket_office::server::{
    config::Config,
    service::{account::AccountService, reference::ReferenceDataService},
    startup,
    util::password::PasswordHasher,
};
use ticket_office_test_utils::{
    constant::TEST_BCRYPT_COST,
    prelude::{test_arrival_time, test_departure_time},
    TestError,
};

fn test_config() -> Config {
    Config::from_lookup(|var| match var {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "BCRYPT_COST" => Some(TEST_BCRYPT_COST.to_string()),
        _ => None,
    })
    .unwrap()
}

/// Expect migrations to apply and seeding to run once only
#[tokio::test]
async fn migrates_and_seeds_idempotently() -> Result<(), TestError> {
    let config = test_config();
    let db = startup::connect_to_database(&config).await.unwrap();

    startup::seed_database(&db, &config).await.unwrap();
    startup::seed_database(&db, &config).await.unwrap();

    let reference_service = ReferenceDataService::new(&db);
    assert_eq!(reference_service.list_cities().await.unwrap().len(), 10);
    assert_eq!(reference_service.list_stations().await.unwrap().len(), 10);
    assert_eq!(reference_service.list_trains().await.unwrap().len(), 10);
    assert_eq!(entity::prelude::User::find().count(&db).await?, 1);

    let admin = AccountService::new(&db, PasswordHasher::new(config.bcrypt_cost))
        .authenticate("admin", "admin")
        .await
        .unwrap();
    assert!(admin.is_admin);

    Ok(())
}

/// Expect the migrated schema to reject a second ticket for the same seat
#[tokio::test]
async fn migrated_schema_enforces_unique_seat() -> Result<(), TestError> {
    use sea_orm::{ActiveValue, SqlErr};

    let config = test_config();
    let db = startup::connect_to_database(&config).await.unwrap();
    startup::seed_database(&db, &config).await.unwrap();

    let reference_service = ReferenceDataService::new(&db);
    let train = reference_service.find_train_by_name("Сапсан").await.unwrap();
    let station = reference_service
        .find_station_by_name("Московский вокзал")
        .await
        .unwrap();
    let passenger = entity::prelude::Passenger::insert(entity::passenger::ActiveModel {
        first_name: ActiveValue::Set("Ivan".to_string()),
        last_name: ActiveValue::Set("Ivanov".to_string()),
        middle_name: ActiveValue::Set(None),
        passport_series: ActiveValue::Set("4510".to_string()),
        passport_number: ActiveValue::Set("123456".to_string()),
        ..Default::default()
    })
    .exec_with_returning(&db)
    .await?;

    let ticket = || entity::ticket::ActiveModel {
        train_id: ActiveValue::Set(train.id),
        departure_station_id: ActiveValue::Set(station.id),
        arrival_station_id: ActiveValue::Set(station.id),
        passenger_id: ActiveValue::Set(passenger.id),
        cashier_id: ActiveValue::Set(None),
        departure_time: ActiveValue::Set(test_departure_time()),
        arrival_time: ActiveValue::Set(test_arrival_time()),
        seat_number: ActiveValue::Set(1),
        ..Default::default()
    };

    entity::prelude::Ticket::insert(ticket()).exec(&db).await?;
    let result = entity::prelude::Ticket::insert(ticket()).exec(&db).await;

    assert!(matches!(
        result.map_err(|e| e.sql_err()),
        Err(Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
