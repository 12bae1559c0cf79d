use sea_orm_migration::{prelude::*, schema::*};

static IDX_PASSENGER_PASSPORT: &str = "idx_passengers_passport";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passenger::Table)
                    .if_not_exists()
                    .col(pk_auto(Passenger::Id))
                    .col(string(Passenger::FirstName))
                    .col(string(Passenger::LastName))
                    .col(string_null(Passenger::MiddleName))
                    .col(string(Passenger::PassportSeries))
                    .col(string(Passenger::PassportNumber))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PASSENGER_PASSPORT)
                    .table(Passenger::Table)
                    .col(Passenger::PassportSeries)
                    .col(Passenger::PassportNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PASSENGER_PASSPORT)
                    .table(Passenger::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Passenger::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Passenger {
    #[sea_orm(iden = "passengers")]
    Table,
    Id,
    FirstName,
    LastName,
    MiddleName,
    PassportSeries,
    PassportNumber,
}
