use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldSpec, Kind};

use super::nullable;

/// SeaORM entity for the `experience` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company: String,
    pub position: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    pub location: String,
    pub company_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Writable fields as they arrive in a request body.
pub const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("company", Kind::Text),
    FieldSpec::required("position", Kind::Text),
    FieldSpec::required("description", Kind::Text),
    FieldSpec::required("start_date", Kind::Date),
    FieldSpec::nullable("end_date", Kind::Date),
    FieldSpec::defaulted("is_current", Kind::Boolean),
    FieldSpec::required("location", Kind::Text),
    FieldSpec::nullable("company_url", Kind::Text),
];

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperience {
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    pub location: String,
    #[serde(default)]
    pub company_url: Option<String>,
}

impl From<&Model> for CreateExperience {
    fn from(m: &Model) -> Self {
        Self {
            company: m.company.clone(),
            position: m.position.clone(),
            description: m.description.clone(),
            start_date: m.start_date,
            end_date: m.end_date,
            is_current: m.is_current,
            location: m.location.clone(),
            company_url: m.company_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<NaiveDate>>,
    pub is_current: Option<bool>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub company_url: Option<Option<String>>,
}

impl UpdateExperience {
    pub fn apply(self, mut base: CreateExperience) -> CreateExperience {
        if let Some(company) = self.company {
            base.company = company;
        }
        if let Some(position) = self.position {
            base.position = position;
        }
        if let Some(description) = self.description {
            base.description = description;
        }
        if let Some(start_date) = self.start_date {
            base.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            base.end_date = end_date;
        }
        if let Some(is_current) = self.is_current {
            base.is_current = is_current;
        }
        if let Some(location) = self.location {
            base.location = location;
        }
        if let Some(company_url) = self.company_url {
            base.company_url = company_url;
        }
        base
    }
}
