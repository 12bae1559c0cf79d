use dioxus_logger::tracing::{self, Level};

use ticket_office::server::{config::Config, service::reference::ReferenceDataService, startup};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("Startup failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), ticket_office::server::error::Error> {
    let db = startup::connect_to_database(config).await?;
    startup::seed_database(&db, config).await?;

    let reference_service = ReferenceDataService::new(&db);
    tracing::info!(
        cities = reference_service.list_cities().await?.len(),
        stations = reference_service.list_stations().await?.len(),
        trains = reference_service.list_trains().await?.len(),
        "Ticket office ready"
    );

    Ok(())
}
