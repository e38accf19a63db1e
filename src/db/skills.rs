use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::skills::{self, CreateSkill, SkillCategory, SkillListQuery, UpdateSkill};

/// Skills in default order: most proficient first, then alphabetical.
pub fn ordered() -> Select<skills::Entity> {
    skills::Entity::find()
        .order_by_desc(skills::Column::ProficiencyLevel)
        .order_by_asc(skills::Column::Name)
}

fn assign(active: &mut skills::ActiveModel, input: CreateSkill, category: SkillCategory) {
    active.name = Set(input.name);
    active.category = Set(category);
    active.proficiency_level = Set(input.proficiency_level);
    active.years_experience = Set(input.years_experience);
    active.is_featured = Set(input.is_featured);
}

/// Fails with `Conflict` if another skill already uses `name`.
async fn ensure_unique_name(
    db: &DatabaseConnection,
    name: &str,
    except: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = skills::Entity::find().filter(skills::Column::Name.eq(name));
    if let Some(id) = except {
        query = query.filter(skills::Column::Id.ne(id));
    }
    if query.count(db).await? > 0 {
        return Err(ApiError::Conflict(format!(
            "A skill named '{name}' already exists"
        )));
    }
    Ok(())
}

/// Validate and insert a new skill.
pub async fn insert_skill(
    db: &DatabaseConnection,
    input: CreateSkill,
) -> Result<skills::Model, ApiError> {
    let category = input.validated_category()?;
    ensure_unique_name(db, &input.name, None).await?;

    let now = Utc::now();
    let mut new_skill = skills::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    assign(&mut new_skill, input, category);

    Ok(new_skill.insert(db).await?)
}

/// Fetch skills matching the optional category and featured filters.
pub async fn list_skills(
    db: &DatabaseConnection,
    query: &SkillListQuery,
) -> Result<Vec<skills::Model>, DbErr> {
    let mut select = ordered();

    if let Some(code) = query.category() {
        match SkillCategory::from_code(code) {
            Some(category) => select = select.filter(skills::Column::Category.eq(category)),
            None => return Ok(Vec::new()),
        }
    }
    if let Some(featured) = query.featured() {
        select = select.filter(skills::Column::IsFeatured.eq(featured));
    }

    select.all(db).await
}

/// Fetch a single skill by ID.
pub async fn get_skill_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<skills::Model>, DbErr> {
    skills::Entity::find_by_id(id).one(db).await
}

/// Apply a partial update; the merged record is validated before writing.
pub async fn update_skill(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateSkill,
) -> Result<skills::Model, ApiError> {
    let skill = get_skill_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Skill {id} not found")))?;

    let candidate = input.apply(CreateSkill::from(&skill));
    let category = candidate.validated_category()?;
    if candidate.name != skill.name {
        ensure_unique_name(db, &candidate.name, Some(id)).await?;
    }

    let mut active: skills::ActiveModel = skill.into();
    assign(&mut active, candidate, category);
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Delete a skill by ID.
pub async fn delete_skill(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    skills::Entity::delete_by_id(id).exec(db).await
}
