//! Hardware Hub - Hardware Asset Inventory Server
//!
//! REST API for registering company hardware, assigning it to employees
//! and tracking it through its lifecycle.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hardware_hub_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::Repository,
    services::{cache::CacheService, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing; the guard must outlive the server for the file
    // appender to flush
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting Hardware Hub v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Connect the cache; the inventory runs uncached if Redis is down
    let cache = match CacheService::new(&config.redis.url, config.redis.cache_ttl_seconds).await {
        Ok(cache) => {
            tracing::info!("Connected to Redis");
            Some(cache)
        }
        Err(e) => {
            tracing::warn!("Redis unavailable, running without cache: {}", e);
            None
        }
    };

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, cache);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize the tracing subscriber from the logging configuration.
/// Returns the appender guard when file logging is enabled.
fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("hardware_hub_server={},tower_http=debug", config.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "hardware-hub-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            // The file layer is built per branch: fmt::Layer is generic over
            // the exact subscriber stack, which differs between the branches
            if config.format == "json" {
                registry
                    .with(tracing_subscriber::fmt::layer().json())
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
            } else {
                registry
                    .with(tracing_subscriber::fmt::layer())
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
            }
            Some(guard)
        }
        None => {
            if config.format == "json" {
                registry
                    .with(tracing_subscriber::fmt::layer().json())
                    .init();
            } else {
                registry.with(tracing_subscriber::fmt::layer()).init();
            }
            None
        }
    }
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Assets
        .route("/assets", get(api::assets::list_assets))
        .route("/assets", post(api::assets::create_asset))
        .route("/assets/:id", get(api::assets::get_asset))
        .route("/assets/:id", put(api::assets::update_asset))
        .route("/assets/:id", delete(api::assets::delete_asset))
        .route("/assets/:id/assign", post(api::assets::assign_asset))
        .route("/assets/:id/unassign", post(api::assets::unassign_asset))
        .route("/assets/:id/retire", post(api::assets::retire_asset))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        // Directory
        .route("/directory/employees", get(api::directory::list_employees))
        .route(
            "/directory/hardware-types",
            get(api::directory::list_hardware_types),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
