use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use intern_match::config::{LoggingSettings, Settings};
use intern_match::core::Matcher;
use intern_match::routes::{self, AppState};
use intern_match::services::Dataset;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` takes precedence over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes before logging so the configured level applies
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Intern Match service...");

    // Missing or corrupt data files are fatal at startup
    let dataset = Dataset::load(
        settings.data.candidates_path(),
        settings.data.internships_path(),
    )
    .map_err(|e| {
        error!("Failed to load dataset: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    let matcher = Matcher::new(
        settings.matching.default_top_n,
        settings.matching.max_top_n,
    );

    info!(
        "Matcher initialized (default top_n: {}, max top_n: {})",
        matcher.default_top_n(),
        matcher.max_top_n()
    );

    // Build application state
    let app_state = AppState::new(dataset, matcher);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
