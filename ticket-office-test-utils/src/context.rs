//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and hands out fixture helpers for inserting test data.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema,
};

use crate::{
    constant::{IDX_PASSENGER_PASSPORT, IDX_TICKET_TRAIN_SEAT},
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_booking_tables().build().await?;
///
/// let train = test.reference().insert_train("Сапсан", 2).await?;
/// let service = BookingService::new(&test.db);
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context with an empty in-memory SQLite database.
    ///
    /// SeaORM limits in-memory SQLite pools to a single connection so every query sees the
    /// same database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables created
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute in order
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create the composite unique indexes the migrations add on top of the entity schema.
    ///
    /// Entity-derived tables only carry single column constraints, these indexes mirror the
    /// passport and per-train seat uniqueness of the production schema.
    pub async fn with_unique_indexes(&self) -> Result<(), TestError> {
        for stmt in unique_index_statements() {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// CREATE TABLE statements for every booking table in dependency order.
pub fn booking_table_statements() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::City),
        schema.create_table_from_entity(entity::prelude::Station),
        schema.create_table_from_entity(entity::prelude::Train),
        schema.create_table_from_entity(entity::prelude::Passenger),
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::Ticket),
    ]
}

fn unique_index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name(IDX_PASSENGER_PASSPORT)
            .table(entity::prelude::Passenger)
            .col(entity::passenger::Column::PassportSeries)
            .col(entity::passenger::Column::PassportNumber)
            .unique()
            .to_owned(),
        Index::create()
            .name(IDX_TICKET_TRAIN_SEAT)
            .table(entity::prelude::Ticket)
            .col(entity::ticket::Column::TrainId)
            .col(entity::ticket::Column::SeatNumber)
            .unique()
            .to_owned(),
    ]
}
