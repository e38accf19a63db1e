use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldSpec, Kind};

use super::nullable;

/// SeaORM entity for the `contact` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Writable fields as they arrive in a request body.
pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("email", Kind::Text),
    FieldSpec::defaulted("phone", Kind::Text),
    FieldSpec::required("location", Kind::Text),
    FieldSpec::nullable("linkedin_url", Kind::Text),
    FieldSpec::nullable("github_url", Kind::Text),
    FieldSpec::nullable("twitter_url", Kind::Text),
    FieldSpec::nullable("website_url", Kind::Text),
    FieldSpec::nullable("resume_url", Kind::Text),
];

#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl From<&Model> for CreateContact {
    fn from(m: &Model) -> Self {
        Self {
            email: m.email.clone(),
            phone: m.phone.clone(),
            location: m.location.clone(),
            linkedin_url: m.linkedin_url.clone(),
            github_url: m.github_url.clone(),
            twitter_url: m.twitter_url.clone(),
            website_url: m.website_url.clone(),
            resume_url: m.resume_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub github_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub twitter_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub website_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub resume_url: Option<Option<String>>,
}

impl UpdateContact {
    pub fn apply(self, mut base: CreateContact) -> CreateContact {
        if let Some(email) = self.email {
            base.email = email;
        }
        if let Some(phone) = self.phone {
            base.phone = phone;
        }
        if let Some(location) = self.location {
            base.location = location;
        }
        if let Some(url) = self.linkedin_url {
            base.linkedin_url = url;
        }
        if let Some(url) = self.github_url {
            base.github_url = url;
        }
        if let Some(url) = self.twitter_url {
            base.twitter_url = url;
        }
        if let Some(url) = self.website_url {
            base.website_url = url;
        }
        if let Some(url) = self.resume_url {
            base.resume_url = url;
        }
        base
    }
}
