use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::auth::middleware::WriteAccess;
use crate::db::skills as skill_db;
use crate::error::ApiError;
use crate::models::skills::{
    SKILL_FIELDS, CreateSkill, SkillListQuery, SkillResponse, UpdateSkill, category_options,
};
use crate::validation::{BodyMode, decode_body};

/// GET /api/skills - list skills, optionally by `category` and `featured`.
pub async fn get_skills(
    db: web::Data<DatabaseConnection>,
    query: web::Query<SkillListQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = skill_db::list_skills(db.get_ref(), &query).await?;
    let response: Vec<SkillResponse> = items.into_iter().map(SkillResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/skills/categories - the fixed category codes and labels.
pub async fn get_categories() -> HttpResponse {
    HttpResponse::Ok().json(category_options())
}

/// GET /api/skills/{id}
pub async fn get_skill(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let skill = skill_db::get_skill_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Skill {id} not found")))?;
    Ok(HttpResponse::Ok().json(SkillResponse::from(skill)))
}

/// POST /api/skills
pub async fn create_skill(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateSkill = decode_body(body.into_inner(), SKILL_FIELDS, BodyMode::Create)?;
    let skill = skill_db::insert_skill(db.get_ref(), input).await?;
    info!(id = %skill.id, name = %skill.name, "Skill created");
    Ok(HttpResponse::Created().json(SkillResponse::from(skill)))
}

/// PUT|PATCH /api/skills/{id} - only supplied fields change.
pub async fn update_skill(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let patch: UpdateSkill = decode_body(body.into_inner(), SKILL_FIELDS, BodyMode::Patch)?;
    let updated = skill_db::update_skill(db.get_ref(), path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(SkillResponse::from(updated)))
}

/// DELETE /api/skills/{id}
pub async fn delete_skill(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = skill_db::delete_skill(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Skill {id} not found")));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Skill {id} deleted"),
    })))
}
