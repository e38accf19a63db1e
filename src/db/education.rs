use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::CurrentQuery;
use crate::models::education::{self, CreateEducation, UpdateEducation};
use crate::validation::Validate;

/// Education in default order: ongoing first, then latest end date.
pub fn ordered() -> Select<education::Entity> {
    education::Entity::find()
        .order_by_desc(education::Column::IsCurrent)
        .order_by_desc(education::Column::EndDate)
        .order_by_desc(education::Column::StartDate)
}

fn assign(active: &mut education::ActiveModel, input: CreateEducation) {
    active.institution = Set(input.institution);
    active.degree = Set(input.degree);
    active.field_of_study = Set(input.field_of_study);
    active.start_date = Set(input.start_date);
    active.end_date = Set(input.end_date);
    active.is_current = Set(input.is_current);
    active.gpa = Set(input.gpa);
    active.location = Set(input.location);
}

/// Validate and insert a new education entry.
pub async fn insert_education(
    db: &DatabaseConnection,
    input: CreateEducation,
) -> Result<education::Model, ApiError> {
    input.validate()?;

    let now = Utc::now();
    let mut new_entry = education::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    assign(&mut new_entry, input);

    Ok(new_entry.insert(db).await?)
}

/// Fetch education entries, optionally only current (or only finished) ones.
pub async fn list_education(
    db: &DatabaseConnection,
    query: &CurrentQuery,
) -> Result<Vec<education::Model>, DbErr> {
    let mut select = ordered();
    if let Some(current) = query.current() {
        select = select.filter(education::Column::IsCurrent.eq(current));
    }
    select.all(db).await
}

/// Fetch a single education entry by ID.
pub async fn get_education_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<education::Model>, DbErr> {
    education::Entity::find_by_id(id).one(db).await
}

/// Apply a partial update; the merged record is validated before writing.
pub async fn update_education(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateEducation,
) -> Result<education::Model, ApiError> {
    let entry = get_education_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Education {id} not found")))?;

    let candidate = input.apply(CreateEducation::from(&entry));
    candidate.validate()?;

    let mut active: education::ActiveModel = entry.into();
    assign(&mut active, candidate);
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Delete an education entry by ID.
pub async fn delete_education(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    education::Entity::delete_by_id(id).exec(db).await
}
