use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::middleware::WriteAccess;
use crate::db::about as about_db;
use crate::error::ApiError;
use crate::models::about::{ABOUT_FIELDS, CreateAbout, UpdateAbout};
use crate::validation::{BodyMode, decode_body};

/// GET /api/about
pub async fn get_about_list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let items = about_db::list_about(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/about/{id}
pub async fn get_about(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let record = about_db::get_about_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("About {id} not found")))?;
    Ok(HttpResponse::Ok().json(record))
}

/// POST /api/about
pub async fn create_about(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateAbout = decode_body(body.into_inner(), ABOUT_FIELDS, BodyMode::Create)?;
    let record = about_db::insert_about(db.get_ref(), input).await?;
    Ok(HttpResponse::Created().json(record))
}

/// PUT|PATCH /api/about/{id}
pub async fn update_about(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let patch: UpdateAbout = decode_body(body.into_inner(), ABOUT_FIELDS, BodyMode::Patch)?;
    let updated =
        about_db::update_about(db.get_ref(), path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/about/{id}
pub async fn delete_about(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = about_db::delete_about(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("About {id} not found")));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("About {id} deleted"),
    })))
}
