use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use volunteer_match::config::{LoggingSettings, Settings};
use volunteer_match::core::Matcher;
use volunteer_match::error::handle_form_payload_error;
use volunteer_match::routes::{configure_routes, AppState};
use volunteer_match::services::SqliteStore;

/// Tracing setup from the logging settings; RUST_LOG takes precedence
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    init_tracing(&settings.logging);

    info!("Starting volunteer match service...");

    let db_max_conn = settings.database.max_connections.unwrap_or(5);
    let db_min_conn = settings.database.min_connections.unwrap_or(1);
    let acquire_timeout = settings.database.acquire_timeout_secs.unwrap_or(5);

    let store = SqliteStore::connect(&settings.database.url, db_max_conn, db_min_conn, acquire_timeout)
        .await
        .map_err(|e| {
            error!("Failed to open database {}: {}", settings.database.url, e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;

    info!("Database ready at {} (max: {} connections)", settings.database.url, db_max_conn);

    let matcher = Matcher::new(settings.matching.top_roles);

    info!("Matcher suggesting top {} roles", matcher.top_n());

    let app_state = AppState::new(Arc::new(store), matcher);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::FormConfig::default().error_handler(handle_form_payload_error))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
