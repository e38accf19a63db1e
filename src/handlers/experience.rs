use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::middleware::WriteAccess;
use crate::db::experience as experience_db;
use crate::error::ApiError;
use crate::models::CurrentQuery;
use crate::models::experience::{EXPERIENCE_FIELDS, CreateExperience, UpdateExperience};
use crate::validation::{BodyMode, decode_body};

/// GET /api/experience - list work history, optionally by `current`.
pub async fn get_experience_list(
    db: web::Data<DatabaseConnection>,
    query: web::Query<CurrentQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = experience_db::list_experience(db.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/experience/{id}
pub async fn get_experience(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let entry = experience_db::get_experience_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Experience {id} not found")))?;
    Ok(HttpResponse::Ok().json(entry))
}

/// POST /api/experience
pub async fn create_experience(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateExperience = decode_body(body.into_inner(), EXPERIENCE_FIELDS, BodyMode::Create)?;
    let entry = experience_db::insert_experience(db.get_ref(), input).await?;
    Ok(HttpResponse::Created().json(entry))
}

/// PUT|PATCH /api/experience/{id}
pub async fn update_experience(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let patch: UpdateExperience = decode_body(body.into_inner(), EXPERIENCE_FIELDS, BodyMode::Patch)?;
    let updated =
        experience_db::update_experience(db.get_ref(), path.into_inner(), patch)
            .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/experience/{id}
pub async fn delete_experience(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = experience_db::delete_experience(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Experience {id} not found")));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Experience {id} deleted"),
    })))
}
