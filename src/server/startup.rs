use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::Config,
    error::Error,
    service::{account::AccountService, reference::ReferenceDataService},
    util::password::PasswordHasher,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seed the reference catalog and the bootstrap administrator into empty tables
///
/// The catalog is seeded in one transaction so a failed start never leaves it half-filled.
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let txn = db.begin().await?;
    ReferenceDataService::new(&txn).seed_defaults().await?;
    txn.commit().await?;

    AccountService::new(db, PasswordHasher::new(config.bcrypt_cost))
        .ensure_default_admin(&config.admin)
        .await?;

    Ok(())
}
