use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::middleware::WriteAccess;
use crate::db::education as education_db;
use crate::error::ApiError;
use crate::models::CurrentQuery;
use crate::models::education::{EDUCATION_FIELDS, CreateEducation, UpdateEducation};
use crate::validation::{BodyMode, decode_body};

/// GET /api/education - list education, optionally by `current`.
pub async fn get_education_list(
    db: web::Data<DatabaseConnection>,
    query: web::Query<CurrentQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = education_db::list_education(db.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/education/{id}
pub async fn get_education(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let entry = education_db::get_education_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Education {id} not found")))?;
    Ok(HttpResponse::Ok().json(entry))
}

/// POST /api/education
pub async fn create_education(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateEducation = decode_body(body.into_inner(), EDUCATION_FIELDS, BodyMode::Create)?;
    let entry = education_db::insert_education(db.get_ref(), input).await?;
    Ok(HttpResponse::Created().json(entry))
}

/// PUT|PATCH /api/education/{id}
pub async fn update_education(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let patch: UpdateEducation = decode_body(body.into_inner(), EDUCATION_FIELDS, BodyMode::Patch)?;
    let updated =
        education_db::update_education(db.get_ref(), path.into_inner(), patch)
            .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/education/{id}
pub async fn delete_education(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = education_db::delete_education(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Education {id} not found")));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Education {id} deleted"),
    })))
}
