use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use posting_service::db::{create_pool, run_migrations};
use posting_service::{handlers, Config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Starting posting-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.environment);

    // Create database connection pool
    let db_pool = create_pool(&config.database.url, config.database.max_connections)
        .await
        .context("Failed to connect to PostgreSQL")?;

    tracing::info!(
        "Database pool created with {} max connections",
        config.database.max_connections
    );

    // Run migrations unless skipped; production schemas are managed by
    // the deploy pipeline
    let run_migrations_env = std::env::var("RUN_MIGRATIONS").unwrap_or_else(|_| "true".into());
    if !config.is_production() && run_migrations_env != "false" {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations completed");
    } else {
        tracing::info!("Skipping database migrations");
    }

    let server_config = config.clone();
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in server_config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/users", web::post().to(handlers::register_user))
            .route("/comments", web::post().to(handlers::create_comment))
            .route("/health", web::get().to(handlers::health_check))
            .route("/health/ready", web::get().to(handlers::readiness_check))
            .route("/health/live", web::get().to(handlers::liveness_check))
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
    .context("HTTP server error")
}
