use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldSpec, Kind};

use super::{flag, nullable};

/// SeaORM entity for the `projects` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub short_description: String,
    /// Comma-separated technology names.
    pub technologies: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Splits the stored technologies text into trimmed, non-empty tokens.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Duration in months (30-day months, one decimal). Open-ended projects
/// are measured up to `today`.
pub fn duration_months(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let days = (end.unwrap_or(today) - start).num_days() as f64;
    (days / 30.0 * 10.0).round() / 10.0
}

// ── DTOs ──

/// Writable fields as they arrive in a request body.
pub const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", Kind::Text),
    FieldSpec::required("description", Kind::Text),
    FieldSpec::required("short_description", Kind::Text),
    FieldSpec::required("technologies", Kind::Text),
    FieldSpec::nullable("github_url", Kind::Text),
    FieldSpec::nullable("live_url", Kind::Text),
    FieldSpec::nullable("image", Kind::Text),
    FieldSpec::defaulted("is_featured", Kind::Boolean),
    FieldSpec::defaulted("is_published", Kind::Boolean),
    FieldSpec::required("start_date", Kind::Date),
    FieldSpec::nullable("end_date", Kind::Date),
];

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub technologies: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_published")]
    pub is_published: bool,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl From<&Model> for CreateProject {
    fn from(m: &Model) -> Self {
        Self {
            title: m.title.clone(),
            description: m.description.clone(),
            short_description: m.short_description.clone(),
            technologies: m.technologies.clone(),
            github_url: m.github_url.clone(),
            live_url: m.live_url.clone(),
            image: m.image.clone(),
            is_featured: m.is_featured,
            is_published: m.is_published,
            start_date: m.start_date,
            end_date: m.end_date,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub technologies: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub github_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub live_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<NaiveDate>>,
}

impl UpdateProject {
    pub fn apply(self, mut base: CreateProject) -> CreateProject {
        if let Some(title) = self.title {
            base.title = title;
        }
        if let Some(description) = self.description {
            base.description = description;
        }
        if let Some(short_description) = self.short_description {
            base.short_description = short_description;
        }
        if let Some(technologies) = self.technologies {
            base.technologies = technologies;
        }
        if let Some(github_url) = self.github_url {
            base.github_url = github_url;
        }
        if let Some(live_url) = self.live_url {
            base.live_url = live_url;
        }
        if let Some(image) = self.image {
            base.image = image;
        }
        if let Some(is_featured) = self.is_featured {
            base.is_featured = is_featured;
        }
        if let Some(is_published) = self.is_published {
            base.is_published = is_published;
        }
        if let Some(start_date) = self.start_date {
            base.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            base.end_date = end_date;
        }
        base
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListQuery {
    pub featured: Option<String>,
    pub published: Option<String>,
    pub technology: Option<String>,
}

impl ProjectListQuery {
    pub fn featured(&self) -> Option<bool> {
        flag(self.featured.as_deref())
    }

    pub fn published(&self) -> Option<bool> {
        flag(self.published.as_deref())
    }

    /// Technology search term; an empty value means no filter.
    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref().filter(|t| !t.is_empty())
    }
}

/// Case-insensitive substring match against technologies, title or description.
pub fn mentions_technology(project: &Model, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [&project.technologies, &project.title, &project.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Project as returned by the API, with the derived fields evaluated at read time.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Model,
    pub technologies_list: Vec<String>,
    pub duration: f64,
}

impl ProjectResponse {
    pub fn new(project: Model, today: NaiveDate) -> Self {
        let technologies_list = split_technologies(&project.technologies);
        let duration = duration_months(project.start_date, project.end_date, today);
        Self {
            project,
            technologies_list,
            duration,
        }
    }
}

impl From<Model> for ProjectResponse {
    fn from(project: Model) -> Self {
        Self::new(project, chrono::Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn closed_project_duration_uses_end_date() {
        let months = duration_months(date(2023, 1, 1), Some(date(2023, 4, 1)), date(2030, 1, 1));
        assert_eq!(months, 3.0);
    }

    #[test]
    fn open_project_duration_runs_to_today() {
        let start = date(2023, 1, 1);
        assert_eq!(duration_months(start, None, date(2023, 1, 31)), 1.0);
        assert_eq!(duration_months(start, None, date(2023, 3, 2)), 2.0);
        assert_eq!(duration_months(start, None, date(2023, 1, 1)), 0.0);
    }

    #[test]
    fn technologies_are_split_and_trimmed() {
        assert_eq!(
            split_technologies(" Rust,  Actix ,SeaORM "),
            vec!["Rust", "Actix", "SeaORM"]
        );
        assert!(split_technologies("").is_empty());
        assert_eq!(split_technologies("Rust,,Go, "), vec!["Rust", "Go"]);
    }

    #[test]
    fn create_defaults_to_published_and_not_featured() {
        let input: CreateProject = serde_json::from_str(
            r#"{
                "title": "Site",
                "description": "A site",
                "short_description": "Site",
                "technologies": "Rust",
                "start_date": "2023-01-01"
            }"#,
        )
        .unwrap();
        assert!(input.is_published);
        assert!(!input.is_featured);
        assert_eq!(input.end_date, None);
    }

    #[test]
    fn patch_can_clear_end_date() {
        let base = CreateProject {
            title: "Site".into(),
            description: "A site".into(),
            short_description: "Site".into(),
            technologies: "Rust".into(),
            github_url: None,
            live_url: None,
            image: None,
            is_featured: false,
            is_published: true,
            start_date: date(2023, 1, 1),
            end_date: Some(date(2023, 6, 1)),
        };
        let patch: UpdateProject = serde_json::from_str(r#"{"end_date": null}"#).unwrap();
        let merged = patch.apply(base.clone());
        assert_eq!(merged.end_date, None);

        let untouched: UpdateProject = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        let merged = untouched.apply(base);
        assert_eq!(merged.end_date, Some(date(2023, 6, 1)));
        assert_eq!(merged.title, "New");
    }
}
