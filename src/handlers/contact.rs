use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::middleware::WriteAccess;
use crate::db::contact as contact_db;
use crate::error::ApiError;
use crate::models::contact::{CONTACT_FIELDS, CreateContact, UpdateContact};
use crate::validation::{BodyMode, decode_body};

/// GET /api/contact
pub async fn get_contacts(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let items = contact_db::list_contacts(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/contact/{id}
pub async fn get_contact(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let record = contact_db::get_contact_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Contact {id} not found")))?;
    Ok(HttpResponse::Ok().json(record))
}

/// POST /api/contact - the email must not already be on file.
pub async fn create_contact(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateContact = decode_body(body.into_inner(), CONTACT_FIELDS, BodyMode::Create)?;
    let record = contact_db::insert_contact(db.get_ref(), input).await?;
    Ok(HttpResponse::Created().json(record))
}

/// PUT|PATCH /api/contact/{id}
pub async fn update_contact(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let patch: UpdateContact = decode_body(body.into_inner(), CONTACT_FIELDS, BodyMode::Patch)?;
    let updated =
        contact_db::update_contact(db.get_ref(), path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/contact/{id}
pub async fn delete_contact(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = contact_db::delete_contact(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Contact {id} not found")));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Contact {id} deleted"),
    })))
}
