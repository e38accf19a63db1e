use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldSpec, Kind};

use super::flag;

/// Skill category stored as its lowercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[sea_orm(string_value = "programming")]
    Programming,
    #[sea_orm(string_value = "framework")]
    Framework,
    #[sea_orm(string_value = "database")]
    Database,
    #[sea_orm(string_value = "tool")]
    Tool,
    #[sea_orm(string_value = "cloud")]
    Cloud,
    #[sea_orm(string_value = "design")]
    Design,
    #[sea_orm(string_value = "other")]
    Other,
}

impl SkillCategory {
    /// Every category in display order.
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Programming,
        SkillCategory::Framework,
        SkillCategory::Database,
        SkillCategory::Tool,
        SkillCategory::Cloud,
        SkillCategory::Design,
        SkillCategory::Other,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Framework => "framework",
            SkillCategory::Database => "database",
            SkillCategory::Tool => "tool",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Design => "design",
            SkillCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming Language",
            SkillCategory::Framework => "Framework/Library",
            SkillCategory::Database => "Database",
            SkillCategory::Tool => "Development Tool",
            SkillCategory::Cloud => "Cloud Platform",
            SkillCategory::Design => "Design Tool",
            SkillCategory::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// SeaORM entity for the `skills` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub category: SkillCategory,
    pub proficiency_level: i32,
    #[sea_orm(column_type = "Double")]
    pub years_experience: f64,
    pub is_featured: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Writable fields as they arrive in a request body.
pub const SKILL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", Kind::Text),
    FieldSpec::defaulted("category", Kind::Text),
    FieldSpec::required("proficiency_level", Kind::Integer),
    FieldSpec::required("years_experience", Kind::Number),
    FieldSpec::defaulted("is_featured", Kind::Boolean),
];

fn default_category() -> String {
    SkillCategory::Other.code().to_string()
}

/// Writable fields of a skill. Category arrives as a raw code so an unknown
/// value is reported as a field error instead of a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub proficiency_level: i32,
    pub years_experience: f64,
    #[serde(default)]
    pub is_featured: bool,
}

impl From<&Model> for CreateSkill {
    fn from(m: &Model) -> Self {
        Self {
            name: m.name.clone(),
            category: m.category.code().to_string(),
            proficiency_level: m.proficiency_level,
            years_experience: m.years_experience,
            is_featured: m.is_featured,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub category: Option<String>,
    pub proficiency_level: Option<i32>,
    pub years_experience: Option<f64>,
    pub is_featured: Option<bool>,
}

impl UpdateSkill {
    /// Overlays the supplied fields on `base`.
    pub fn apply(self, mut base: CreateSkill) -> CreateSkill {
        if let Some(name) = self.name {
            base.name = name;
        }
        if let Some(category) = self.category {
            base.category = category;
        }
        if let Some(level) = self.proficiency_level {
            base.proficiency_level = level;
        }
        if let Some(years) = self.years_experience {
            base.years_experience = years;
        }
        if let Some(featured) = self.is_featured {
            base.is_featured = featured;
        }
        base
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillListQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
}

impl SkillListQuery {
    /// Category filter; an empty value means no filter.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn featured(&self) -> Option<bool> {
        flag(self.featured.as_deref())
    }
}

/// Skill as returned by the API, with the category label resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    #[serde(flatten)]
    pub skill: Model,
    pub category_display: &'static str,
}

impl From<Model> for SkillResponse {
    fn from(skill: Model) -> Self {
        let category_display = skill.category.label();
        Self {
            skill,
            category_display,
        }
    }
}

/// One entry of `GET /api/skills/categories`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn category_options() -> Vec<CategoryOption> {
    SkillCategory::ALL
        .into_iter()
        .map(|c| CategoryOption {
            value: c.code(),
            label: c.label(),
        })
        .collect()
}
