use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::CurrentQuery;
use crate::models::experience::{self, CreateExperience, UpdateExperience};
use crate::validation::Validate;

/// Experience in default order: current position first, then latest start.
pub fn ordered() -> Select<experience::Entity> {
    experience::Entity::find()
        .order_by_desc(experience::Column::IsCurrent)
        .order_by_desc(experience::Column::StartDate)
}

fn assign(active: &mut experience::ActiveModel, input: CreateExperience) {
    active.company = Set(input.company);
    active.position = Set(input.position);
    active.description = Set(input.description);
    active.start_date = Set(input.start_date);
    active.end_date = Set(input.end_date);
    active.is_current = Set(input.is_current);
    active.location = Set(input.location);
    active.company_url = Set(input.company_url);
}

/// Validate and insert a new experience entry.
pub async fn insert_experience(
    db: &DatabaseConnection,
    input: CreateExperience,
) -> Result<experience::Model, ApiError> {
    input.validate()?;

    let now = Utc::now();
    let mut new_entry = experience::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    assign(&mut new_entry, input);

    Ok(new_entry.insert(db).await?)
}

/// Fetch experience entries, optionally only current (or only past) ones.
pub async fn list_experience(
    db: &DatabaseConnection,
    query: &CurrentQuery,
) -> Result<Vec<experience::Model>, DbErr> {
    let mut select = ordered();
    if let Some(current) = query.current() {
        select = select.filter(experience::Column::IsCurrent.eq(current));
    }
    select.all(db).await
}

/// Fetch a single experience entry by ID.
pub async fn get_experience_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<experience::Model>, DbErr> {
    experience::Entity::find_by_id(id).one(db).await
}

/// Apply a partial update; the merged record is validated before writing.
pub async fn update_experience(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateExperience,
) -> Result<experience::Model, ApiError> {
    let entry = get_experience_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Experience {id} not found")))?;

    let candidate = input.apply(CreateExperience::from(&entry));
    candidate.validate()?;

    let mut active: experience::ActiveModel = entry.into();
    assign(&mut active, candidate);
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Delete an experience entry by ID.
pub async fn delete_experience(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    experience::Entity::delete_by_id(id).exec(db).await
}
