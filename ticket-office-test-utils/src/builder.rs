//! Declarative test builder.
//!
//! The builder queues tables and fixtures, then creates them in dependency order during
//! `build()`.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::booking_table_statements, error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_booking_tables: bool,

    // Database fixtures to insert
    stations: Vec<String>,
    trains: Vec<(String, i32)>, // (name, total_seats)
    users: Vec<(String, bool)>, // (username, is_admin)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_booking_tables: false,
            stations: Vec::new(),
            trains: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every booking table plus the composite unique indexes on passport and seat.
    pub fn with_booking_tables(mut self) -> Self {
        self.include_booking_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ticket_office_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), ticket_office_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::City)
    ///     .with_table(entity::prelude::Station)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a station, together with a city of the same name, during `build()`.
    pub fn with_station(mut self, name: impl Into<String>) -> Self {
        self.stations.push(name.into());
        self
    }

    /// Insert a train with `total_seats` seats during `build()`.
    pub fn with_train(mut self, name: impl Into<String>, total_seats: i32) -> Self {
        self.trains.push((name.into(), total_seats));
        self
    }

    /// Insert a user with [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD) during `build()`.
    pub fn with_user(mut self, username: impl Into<String>, is_admin: bool) -> Self {
        self.users.push((username.into(), is_admin));
        self
    }

    /// Build the test context.
    ///
    /// Executes queued operations in order:
    /// 1. Creates tables (booking tables & unique indexes if requested, then custom tables)
    /// 2. Inserts stations, trains, then users
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::HashError)` - Hashing a fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        if self.include_booking_tables {
            all_tables.extend(booking_table_statements());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_booking_tables {
            setup.with_unique_indexes().await?;
        }

        // 2. Insert database fixtures
        for name in self.stations {
            setup.reference().insert_station(&name).await?;
        }

        for (name, total_seats) in self.trains {
            setup.reference().insert_train(&name, total_seats).await?;
        }

        for (username, is_admin) in self.users {
            setup.user().insert_user(&username, is_admin).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
