use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::about::{self, CreateAbout, UpdateAbout};
use crate::validation::Validate;

/// About records oldest first, so the first row is the one shown.
pub fn ordered() -> Select<about::Entity> {
    about::Entity::find()
        .order_by_asc(about::Column::CreatedAt)
        .order_by_asc(about::Column::Id)
}

fn assign(active: &mut about::ActiveModel, input: CreateAbout) {
    active.name = Set(input.name);
    active.title = Set(input.title);
    active.bio = Set(input.bio);
    active.profile_image = Set(input.profile_image);
    active.resume_file = Set(input.resume_file);
}

/// Validate and insert a new about record.
pub async fn insert_about(
    db: &DatabaseConnection,
    input: CreateAbout,
) -> Result<about::Model, ApiError> {
    input.validate()?;

    let now = Utc::now();
    let mut new_about = about::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    assign(&mut new_about, input);

    Ok(new_about.insert(db).await?)
}

/// Fetch all about records.
pub async fn list_about(db: &DatabaseConnection) -> Result<Vec<about::Model>, DbErr> {
    ordered().all(db).await
}

/// The earliest about record, if any.
pub async fn first_about(db: &DatabaseConnection) -> Result<Option<about::Model>, DbErr> {
    ordered().one(db).await
}

/// Fetch a single about record by ID.
pub async fn get_about_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<about::Model>, DbErr> {
    about::Entity::find_by_id(id).one(db).await
}

/// Apply a partial update; the merged record is validated before writing.
pub async fn update_about(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateAbout,
) -> Result<about::Model, ApiError> {
    let record = get_about_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("About {id} not found")))?;

    let candidate = input.apply(CreateAbout::from(&record));
    candidate.validate()?;

    let mut active: about::ActiveModel = record.into();
    assign(&mut active, candidate);
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Delete an about record by ID.
pub async fn delete_about(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    about::Entity::delete_by_id(id).exec(db).await
}
