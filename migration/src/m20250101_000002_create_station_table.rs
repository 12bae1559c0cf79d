use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250101_000001_create_city_table::City;

static FK_STATION_CITY_ID: &str = "fk_stations_city_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Station::Table)
                    .if_not_exists()
                    .col(pk_auto(Station::Id))
                    .col(string_uniq(Station::Name))
                    .col(integer(Station::CityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STATION_CITY_ID)
                            .from(Station::Table, Station::CityId)
                            .to(City::Table, City::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Station::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Station {
    #[sea_orm(iden = "stations")]
    Table,
    Id,
    Name,
    CityId,
}
