use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldSpec, Kind};

use super::nullable;

/// SeaORM entity for the `about` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    /// Path relative to the media root.
    pub profile_image: Option<String>,
    pub resume_file: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Writable fields as they arrive in a request body.
pub const ABOUT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", Kind::Text),
    FieldSpec::required("title", Kind::Text),
    FieldSpec::required("bio", Kind::Text),
    FieldSpec::nullable("profile_image", Kind::Text),
    FieldSpec::nullable("resume_file", Kind::Text),
];

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAbout {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub resume_file: Option<String>,
}

impl From<&Model> for CreateAbout {
    fn from(m: &Model) -> Self {
        Self {
            name: m.name.clone(),
            title: m.title.clone(),
            bio: m.bio.clone(),
            profile_image: m.profile_image.clone(),
            resume_file: m.resume_file.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAbout {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub profile_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub resume_file: Option<Option<String>>,
}

impl UpdateAbout {
    pub fn apply(self, mut base: CreateAbout) -> CreateAbout {
        if let Some(name) = self.name {
            base.name = name;
        }
        if let Some(title) = self.title {
            base.title = title;
        }
        if let Some(bio) = self.bio {
            base.bio = bio;
        }
        if let Some(profile_image) = self.profile_image {
            base.profile_image = profile_image;
        }
        if let Some(resume_file) = self.resume_file {
            base.resume_file = resume_file;
        }
        base
    }
}
