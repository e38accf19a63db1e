use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::contact::{self, CreateContact, UpdateContact};
use crate::validation::Validate;

/// Contact records oldest first, so the first row is the primary contact.
pub fn ordered() -> Select<contact::Entity> {
    contact::Entity::find()
        .order_by_asc(contact::Column::CreatedAt)
        .order_by_asc(contact::Column::Id)
}

fn assign(active: &mut contact::ActiveModel, input: CreateContact) {
    active.email = Set(input.email);
    active.phone = Set(input.phone);
    active.location = Set(input.location);
    active.linkedin_url = Set(input.linkedin_url);
    active.github_url = Set(input.github_url);
    active.twitter_url = Set(input.twitter_url);
    active.website_url = Set(input.website_url);
    active.resume_url = Set(input.resume_url);
}

/// Fails with `Conflict` if another contact record already uses `email`.
async fn ensure_unique_email(
    db: &DatabaseConnection,
    email: &str,
    except: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = contact::Entity::find().filter(contact::Column::Email.eq(email));
    if let Some(id) = except {
        query = query.filter(contact::Column::Id.ne(id));
    }
    if query.count(db).await? > 0 {
        return Err(ApiError::Conflict(format!(
            "Contact information with email '{email}' already exists"
        )));
    }
    Ok(())
}

/// Validate and insert a new contact record.
pub async fn insert_contact(
    db: &DatabaseConnection,
    input: CreateContact,
) -> Result<contact::Model, ApiError> {
    input.validate()?;
    ensure_unique_email(db, &input.email, None).await?;

    let now = Utc::now();
    let mut new_contact = contact::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    assign(&mut new_contact, input);

    Ok(new_contact.insert(db).await?)
}

/// Fetch all contact records.
pub async fn list_contacts(db: &DatabaseConnection) -> Result<Vec<contact::Model>, DbErr> {
    ordered().all(db).await
}

/// The primary (earliest) contact record, if any.
pub async fn first_contact(db: &DatabaseConnection) -> Result<Option<contact::Model>, DbErr> {
    ordered().one(db).await
}

/// Fetch a single contact record by ID.
pub async fn get_contact_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<contact::Model>, DbErr> {
    contact::Entity::find_by_id(id).one(db).await
}

/// Apply a partial update; the merged record is validated before writing.
pub async fn update_contact(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateContact,
) -> Result<contact::Model, ApiError> {
    let record = get_contact_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Contact {id} not found")))?;

    let candidate = input.apply(CreateContact::from(&record));
    candidate.validate()?;
    if candidate.email != record.email {
        ensure_unique_email(db, &candidate.email, Some(id)).await?;
    }

    let mut active: contact::ActiveModel = record.into();
    assign(&mut active, candidate);
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Delete a contact record by ID.
pub async fn delete_contact(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    contact::Entity::delete_by_id(id).exec(db).await
}
