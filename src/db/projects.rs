use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::projects::{
    self, CreateProject, ProjectListQuery, UpdateProject, mentions_technology, split_technologies,
};
use crate::validation::Validate;

/// Projects in default order: featured first, then newest start date.
pub fn ordered() -> Select<projects::Entity> {
    projects::Entity::find()
        .order_by_desc(projects::Column::IsFeatured)
        .order_by_desc(projects::Column::StartDate)
}

fn assign(active: &mut projects::ActiveModel, input: CreateProject) {
    active.title = Set(input.title);
    active.description = Set(input.description);
    active.short_description = Set(input.short_description);
    active.technologies = Set(input.technologies);
    active.github_url = Set(input.github_url);
    active.live_url = Set(input.live_url);
    active.image = Set(input.image);
    active.is_featured = Set(input.is_featured);
    active.is_published = Set(input.is_published);
    active.start_date = Set(input.start_date);
    active.end_date = Set(input.end_date);
}

/// Validate and insert a new project.
pub async fn insert_project(
    db: &DatabaseConnection,
    input: CreateProject,
) -> Result<projects::Model, ApiError> {
    input.validate()?;

    let now = Utc::now();
    let mut new_project = projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    assign(&mut new_project, input);

    Ok(new_project.insert(db).await?)
}

/// Fetch projects matching the optional featured, published and technology
/// filters. The technology term is matched case-insensitively against the
/// technologies, title and description text.
pub async fn list_projects(
    db: &DatabaseConnection,
    query: &ProjectListQuery,
) -> Result<Vec<projects::Model>, DbErr> {
    let mut select = ordered();

    if let Some(featured) = query.featured() {
        select = select.filter(projects::Column::IsFeatured.eq(featured));
    }
    if let Some(published) = query.published() {
        select = select.filter(projects::Column::IsPublished.eq(published));
    }

    let items = select.all(db).await?;

    Ok(match query.technology() {
        Some(term) => items
            .into_iter()
            .filter(|p| mentions_technology(p, term))
            .collect(),
        None => items,
    })
}

/// Sorted, de-duplicated technology names across all published projects.
pub async fn published_technologies(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let published = projects::Entity::find()
        .filter(projects::Column::IsPublished.eq(true))
        .all(db)
        .await?;

    let names: BTreeSet<String> = published
        .iter()
        .flat_map(|p| split_technologies(&p.technologies))
        .collect();

    Ok(names.into_iter().collect())
}

/// Fetch a single project by ID.
pub async fn get_project_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<projects::Model>, DbErr> {
    projects::Entity::find_by_id(id).one(db).await
}

/// Apply a partial update; the merged record is validated before writing.
pub async fn update_project(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateProject,
) -> Result<projects::Model, ApiError> {
    let project = get_project_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {id} not found")))?;

    let candidate = input.apply(CreateProject::from(&project));
    candidate.validate()?;

    let mut active: projects::ActiveModel = project.into();
    assign(&mut active, candidate);
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Delete a project by ID.
pub async fn delete_project(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    projects::Entity::delete_by_id(id).exec(db).await
}
