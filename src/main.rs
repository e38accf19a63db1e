use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use portfolio_backend::auth::middleware::WriteAuth;
use portfolio_backend::config::{AppConfig, WriteAuthConfig};
use portfolio_backend::{build_app, create_pool};
use std::io;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let db = create_pool(&config.database_url)
        .await
        .map_err(io::Error::other)?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        Migrator::up(&db, None).await.map_err(io::Error::other)?;
        tracing::info!("Migrations applied");
    }

    match &config.write_auth {
        WriteAuthConfig::Off => tracing::warn!("Write authentication is off; all writes are accepted"),
        WriteAuthConfig::Secret { .. } => tracing::info!("Writes require an HS256 bearer token"),
        WriteAuthConfig::Jwks { url, .. } => tracing::info!("Writes require a token signed by {url}"),
    }

    let db_data = web::Data::new(db);
    let auth_data = web::Data::new(WriteAuth::from(&config.write_auth));
    let site_data = web::Data::new(config.site.clone());
    let media_dir = config.media_dir.clone();

    let bind_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let media_dir = media_dir.clone();
        build_app(db_data.clone(), auth_data.clone(), site_data.clone())
            .configure(move |cfg| {
                if let Some(dir) = media_dir {
                    cfg.service(Files::new("/media", dir));
                }
            })
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .wrap(cors)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
