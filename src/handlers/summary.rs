use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use tracing::error;

use crate::db::summary as summary_db;
use crate::error::ApiError;

/// GET /api/summary - about, contact, featured skills and projects, recent
/// experience and all education in one response.
///
/// All or nothing: any failing read turns into a single 500 whose body
/// carries no database detail.
pub async fn get_summary(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    match summary_db::load_summary(db.get_ref()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(summary)),
        Err(e) => {
            error!("Portfolio summary failed: {e}");
            Err(ApiError::Aggregation(
                "Failed to retrieve portfolio summary".to_string(),
            ))
        }
    }
}

/// GET /api/summary/stats - record counts per entity.
pub async fn get_stats(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    match summary_db::load_stats(db.get_ref()).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(stats)),
        Err(e) => {
            error!("Portfolio stats failed: {e}");
            Err(ApiError::Aggregation(
                "Failed to retrieve portfolio stats".to_string(),
            ))
        }
    }
}
