//! Reference data store.
//!
//! Read access to the city, station and train catalog plus the one-time seeding of the
//! default catalog. The booking engine only ever reads through this service.

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::reference::{city::CityRepository, station::StationRepository, train::TrainRepository},
    error::{booking::BookingError, Error},
    model::db::{CityModel, StationModel, TrainModel},
};

/// Default catalog of `(city, station)` pairs, one main station per city.
pub static DEFAULT_STATIONS: [(&str, &str); 10] = [
    ("Москва", "Ленинградский вокзал"),
    ("Санкт-Петербург", "Московский вокзал"),
    ("Новосибирск", "Новосибирский вокзал"),
    ("Екатеринбург", "Екатеринбургский вокзал"),
    ("Казань", "Казанский вокзал"),
    ("Нижний Новгород", "Нижегородский вокзал"),
    ("Самара", "Самарский вокзал"),
    ("Омск", "Омский вокзал"),
    ("Челябинск", "Челябинский вокзал"),
    ("Ростов-на-Дону", "Ростовский вокзал"),
];

/// Default catalog of `(train, total_seats)` pairs.
pub static DEFAULT_TRAINS: [(&str, i32); 10] = [
    ("Ласточка", 443),
    ("Сапсан", 350),
    ("Аэроэкспресс", 200),
    ("РЖД", 600),
    ("Стриж", 400),
    ("Ярославль", 250),
    ("Сибирь", 500),
    ("Транссибирский", 1000),
    ("Уральский экспресс", 300),
    ("Красная стрела", 450),
];

/// Number of rows inserted per table by [`ReferenceDataService::seed_defaults`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Cities inserted, including any created for a station whose city was missing
    pub cities: usize,
    /// Stations inserted
    pub stations: usize,
    /// Trains inserted
    pub trains: usize,
}

/// Service for the static reference catalog.
pub struct ReferenceDataService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReferenceDataService<'a, C> {
    /// Creates a new instance of [`ReferenceDataService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all cities in insertion order
    pub async fn list_cities(&self) -> Result<Vec<CityModel>, Error> {
        Ok(CityRepository::new(self.db).list_all().await?)
    }

    /// Lists all stations in insertion order
    pub async fn list_stations(&self) -> Result<Vec<StationModel>, Error> {
        Ok(StationRepository::new(self.db).list_all().await?)
    }

    /// Lists all trains in insertion order
    pub async fn list_trains(&self) -> Result<Vec<TrainModel>, Error> {
        Ok(TrainRepository::new(self.db).list_all().await?)
    }

    /// Resolves a train by name.
    ///
    /// # Returns
    /// - `Ok(TrainModel)` - Train found
    /// - `Err(Error::BookingError(ReferenceNotFound))` - No train has this name
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn find_train_by_name(&self, name: &str) -> Result<TrainModel, Error> {
        TrainRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| BookingError::train_not_found(name).into())
    }

    /// Resolves a station by name.
    ///
    /// # Returns
    /// - `Ok(StationModel)` - Station found
    /// - `Err(Error::BookingError(ReferenceNotFound))` - No station has this name
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn find_station_by_name(&self, name: &str) -> Result<StationModel, Error> {
        StationRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| BookingError::station_not_found(name).into())
    }

    /// Seeds the default catalog into empty tables.
    ///
    /// Each table is checked on its own and only filled when it holds no rows, so running
    /// this on every start is idempotent and never touches a populated catalog. Stations
    /// attach to the default city of the same pairing, creating that city if it is missing.
    pub async fn seed_defaults(&self) -> Result<SeedReport, Error> {
        let city_repo = CityRepository::new(self.db);
        let station_repo = StationRepository::new(self.db);
        let train_repo = TrainRepository::new(self.db);

        let mut report = SeedReport::default();

        if city_repo.is_empty().await? {
            for (city_name, _) in DEFAULT_STATIONS {
                city_repo.create(city_name).await?;
                report.cities += 1;
            }
        }

        if station_repo.is_empty().await? {
            let mut cities = city_repo.list_all().await?;

            for (city_name, station_name) in DEFAULT_STATIONS {
                let city_id = match cities.iter().find(|city| city.name == city_name) {
                    Some(city) => city.id,
                    None => {
                        let city = city_repo.create(city_name).await?;
                        report.cities += 1;
                        let city_id = city.id;
                        cities.push(city);

                        city_id
                    }
                };

                station_repo.create(station_name, city_id).await?;
                report.stations += 1;
            }
        }

        if train_repo.is_empty().await? {
            for (train_name, total_seats) in DEFAULT_TRAINS {
                train_repo.create(train_name, total_seats).await?;
                report.trains += 1;
            }
        }

        if report != SeedReport::default() {
            tracing::info!(
                cities = report.cities,
                stations = report.stations,
                trains = report.trains,
                "Seeded reference data"
            );
        }

        Ok(report)
    }
}
