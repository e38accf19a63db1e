use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldSpec, Kind};

use super::nullable;

/// SeaORM entity for the `education` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    /// On a 4.0 scale.
    #[sea_orm(column_type = "Double", nullable)]
    pub gpa: Option<f64>,
    pub location: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Writable fields as they arrive in a request body.
pub const EDUCATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("institution", Kind::Text),
    FieldSpec::required("degree", Kind::Text),
    FieldSpec::required("field_of_study", Kind::Text),
    FieldSpec::required("start_date", Kind::Date),
    FieldSpec::nullable("end_date", Kind::Date),
    FieldSpec::defaulted("is_current", Kind::Boolean),
    FieldSpec::nullable("gpa", Kind::Number),
    FieldSpec::required("location", Kind::Text),
];

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEducation {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub gpa: Option<f64>,
    pub location: String,
}

impl From<&Model> for CreateEducation {
    fn from(m: &Model) -> Self {
        Self {
            institution: m.institution.clone(),
            degree: m.degree.clone(),
            field_of_study: m.field_of_study.clone(),
            start_date: m.start_date,
            end_date: m.end_date,
            is_current: m.is_current,
            gpa: m.gpa,
            location: m.location.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEducation {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<NaiveDate>>,
    pub is_current: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub gpa: Option<Option<f64>>,
    pub location: Option<String>,
}

impl UpdateEducation {
    pub fn apply(self, mut base: CreateEducation) -> CreateEducation {
        if let Some(institution) = self.institution {
            base.institution = institution;
        }
        if let Some(degree) = self.degree {
            base.degree = degree;
        }
        if let Some(field_of_study) = self.field_of_study {
            base.field_of_study = field_of_study;
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
        if let Some(gpa) = self.gpa {
            base.gpa = gpa;
        }
        if let Some(location) = self.location {
            base.location = location;
        }
        base
    }
}
