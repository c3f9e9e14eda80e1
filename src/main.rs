use actix_web::{middleware::Logger, web, App, HttpServer};
use staff_registry::config::EnvConfig;
use staff_registry::db::database_service::DatabaseService;
use staff_registry::routes::configure_routes;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = EnvConfig::from_env();
    let addr = config.bind_address();

    let database_service = match DatabaseService::new(&config.database).await {
        Ok(service) => Arc::new(service.with_composite_atomic(config.composite_atomic)),
        Err(e) => {
            error!("Failed to initialize DatabaseService: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!(composite_atomic = config.composite_atomic, "Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
