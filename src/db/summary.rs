use chrono::Utc;
use futures_util::try_join;
use sea_orm::*;

use crate::db::{about as about_db, contact as contact_db};
use crate::db::{education as education_db, experience as experience_db};
use crate::db::{projects as project_db, skills as skill_db};
use crate::models::projects::{self, ProjectResponse};
use crate::models::skills::{self, SkillResponse};
use crate::models::summary::{
    PortfolioStats, PortfolioSummary, SUMMARY_EXPERIENCE_LIMIT, SUMMARY_PROJECT_LIMIT,
    SUMMARY_SKILL_LIMIT,
};
use crate::models::{education, experience};

async fn featured_skills(db: &DatabaseConnection) -> Result<Vec<skills::Model>, DbErr> {
    skill_db::ordered()
        .filter(skills::Column::IsFeatured.eq(true))
        .limit(SUMMARY_SKILL_LIMIT)
        .all(db)
        .await
}

async fn featured_projects(db: &DatabaseConnection) -> Result<Vec<projects::Model>, DbErr> {
    project_db::ordered()
        .filter(projects::Column::IsFeatured.eq(true))
        .filter(projects::Column::IsPublished.eq(true))
        .limit(SUMMARY_PROJECT_LIMIT)
        .all(db)
        .await
}

async fn recent_experience(db: &DatabaseConnection) -> Result<Vec<experience::Model>, DbErr> {
    experience_db::ordered()
        .limit(SUMMARY_EXPERIENCE_LIMIT)
        .all(db)
        .await
}

async fn all_education(db: &DatabaseConnection) -> Result<Vec<education::Model>, DbErr> {
    education_db::ordered().all(db).await
}

/// Compose the landing-page snapshot. Any failing read fails the whole
/// snapshot; nothing partial is returned.
pub async fn load_summary(db: &DatabaseConnection) -> Result<PortfolioSummary, DbErr> {
    let (about, contact, skill_rows, project_rows, experience_rows, education_rows) = try_join!(
        about_db::first_about(db),
        contact_db::first_contact(db),
        featured_skills(db),
        featured_projects(db),
        recent_experience(db),
        all_education(db),
    )?;

    let today = Utc::now().date_naive();

    Ok(PortfolioSummary {
        about,
        contact,
        featured_skills: skill_rows.into_iter().map(SkillResponse::from).collect(),
        featured_projects: project_rows
            .into_iter()
            .map(|p| ProjectResponse::new(p, today))
            .collect(),
        recent_experience: experience_rows,
        education: education_rows,
    })
}

/// Exact counts over the full tables.
pub async fn load_stats(db: &DatabaseConnection) -> Result<PortfolioStats, DbErr> {
    let (
        total_projects,
        featured_projects,
        total_skills,
        featured_skills,
        total_experience,
        current_experience,
        total_education,
        current_education,
    ) = try_join!(
        projects::Entity::find()
            .filter(projects::Column::IsPublished.eq(true))
            .count(db),
        projects::Entity::find()
            .filter(projects::Column::IsFeatured.eq(true))
            .filter(projects::Column::IsPublished.eq(true))
            .count(db),
        skills::Entity::find().count(db),
        skills::Entity::find()
            .filter(skills::Column::IsFeatured.eq(true))
            .count(db),
        experience::Entity::find().count(db),
        experience::Entity::find()
            .filter(experience::Column::IsCurrent.eq(true))
            .count(db),
        education::Entity::find().count(db),
        education::Entity::find()
            .filter(education::Column::IsCurrent.eq(true))
            .count(db),
    )?;

    Ok(PortfolioStats {
        total_projects,
        featured_projects,
        total_skills,
        featured_skills,
        total_experience,
        current_experience,
        total_education,
        current_education,
    })
}
