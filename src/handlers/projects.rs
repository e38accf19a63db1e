use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::auth::middleware::WriteAccess;
use crate::db::projects as project_db;
use crate::error::ApiError;
use crate::models::projects::{
    CreateProject, PROJECT_FIELDS, ProjectListQuery, ProjectResponse, UpdateProject,
};
use crate::validation::{BodyMode, decode_body};

/// GET /api/projects - list projects, filtered by `featured`, `published`
/// and a `technology` search term.
pub async fn get_projects(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ProjectListQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = project_db::list_projects(db.get_ref(), &query).await?;
    let today = chrono::Utc::now().date_naive();
    let response: Vec<ProjectResponse> = items
        .into_iter()
        .map(|p| ProjectResponse::new(p, today))
        .collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/projects/technologies - distinct technologies of published projects.
pub async fn get_technologies(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let names = project_db::published_technologies(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(names))
}

/// GET /api/projects/{id}
pub async fn get_project(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let project = project_db::get_project_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {id} not found")))?;
    Ok(HttpResponse::Ok().json(ProjectResponse::from(project)))
}

/// POST /api/projects
pub async fn create_project(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateProject = decode_body(body.into_inner(), PROJECT_FIELDS, BodyMode::Create)?;
    let project = project_db::insert_project(db.get_ref(), input).await?;
    info!(id = %project.id, title = %project.title, "Project created");
    Ok(HttpResponse::Created().json(ProjectResponse::from(project)))
}

/// PUT|PATCH /api/projects/{id}
pub async fn update_project(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let patch: UpdateProject = decode_body(body.into_inner(), PROJECT_FIELDS, BodyMode::Patch)?;
    let updated =
        project_db::update_project(db.get_ref(), path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(ProjectResponse::from(updated)))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    _access: WriteAccess,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = project_db::delete_project(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Project {id} not found")));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Project {id} deleted"),
    })))
}
