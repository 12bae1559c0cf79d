//! Shorthand macros for the most common test setups.

/// Create a test context with tables for the given entities only.
///
/// With no arguments the database is left empty, useful for asserting that operations fail
/// when their tables are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Create a test context with every booking table and the composite unique indexes.
#[macro_export]
macro_rules! test_setup_with_booking_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;

            setup
                .with_tables($crate::context::booking_table_statements())
                .await?;
            setup.with_unique_indexes().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
