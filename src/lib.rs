pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod validation;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::WriteAuth;
use crate::config::SiteConfig;

pub use db::create_pool;

/// The application with every route and shared state registered. The server
/// binary adds its middleware on top; tests use it as is.
pub fn build_app(
    db: web::Data<DatabaseConnection>,
    write_auth: web::Data<WriteAuth>,
    site: web::Data<SiteConfig>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(db)
        .app_data(write_auth)
        .app_data(site)
        .route("/health", web::get().to(handlers::root::health))
        .service(web::scope("/api").configure(handlers::init_routes))
        .default_service(web::to(handlers::not_found))
}
