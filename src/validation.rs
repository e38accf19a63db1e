//! Field and record checks applied to a candidate record before it is written.
//!
//! Checks never touch the database and never mutate the candidate. Uniqueness
//! is the store's concern and lives in `db`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use email_address::EmailAddress;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::about::CreateAbout;
use crate::models::contact::CreateContact;
use crate::models::education::CreateEducation;
use crate::models::experience::CreateExperience;
use crate::models::projects::CreateProject;
use crate::models::skills::{CreateSkill, SkillCategory};

const URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// One message per offending field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Records `message` for `field` unless the field already failed.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

// ── Payload shape ──

/// JSON type a writable field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Integer,
    Number,
    Boolean,
    Date,
}

impl Kind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            Kind::Text => value.is_string(),
            Kind::Integer => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
            Kind::Number => value.is_number(),
            Kind::Boolean => value.is_boolean(),
            Kind::Date => value
                .as_str()
                .is_some_and(|s| s.parse::<NaiveDate>().is_ok()),
        }
    }

    fn message(self) -> &'static str {
        match self {
            Kind::Text => "Not a valid string.",
            Kind::Integer => "A valid integer is required.",
            Kind::Number => "A valid number is required.",
            Kind::Boolean => "Must be a valid boolean.",
            Kind::Date => "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be supplied on create. Never null.
    Required,
    /// May be omitted, a default applies. Never null.
    Defaulted,
    /// May be omitted or null.
    Nullable,
}

/// One writable field of a resource body.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: Kind,
    pub presence: Presence,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: Kind) -> Self {
        Self { name, kind, presence: Presence::Required }
    }

    pub const fn defaulted(name: &'static str, kind: Kind) -> Self {
        Self { name, kind, presence: Presence::Defaulted }
    }

    pub const fn nullable(name: &'static str, kind: Kind) -> Self {
        Self { name, kind, presence: Presence::Nullable }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    Create,
    /// Nothing is required; supplied fields are still type-checked.
    Patch,
}

/// Check a request body against `fields` and decode it. Missing, null and
/// mistyped fields are all reported at once as field errors.
pub fn decode_body<T: DeserializeOwned>(
    body: Value,
    fields: &[FieldSpec],
    mode: BodyMode,
) -> Result<T, ApiError> {
    let Some(object) = body.as_object() else {
        return Err(ApiError::BadRequest("Expected a JSON object".to_string()));
    };

    let mut errors = FieldErrors::default();
    for field in fields {
        match object.get(field.name) {
            None => {
                if mode == BodyMode::Create && field.presence == Presence::Required {
                    errors.add(field.name, "This field is required.");
                }
            }
            Some(Value::Null) => {
                if field.presence != Presence::Nullable {
                    errors.add(field.name, "This field may not be null.");
                }
            }
            Some(value) => {
                if !field.kind.accepts(value) {
                    errors.add(field.name, field.kind.message());
                }
            }
        }
    }
    errors.into_result()?;

    serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn required_text(errors: &mut FieldErrors, field: &str, value: &str, max: Option<usize>) {
    if value.trim().is_empty() {
        errors.add(field, "This field may not be blank.");
        return;
    }
    if let Some(max) = max {
        max_len(errors, field, value, max);
    }
}

fn max_len(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("Ensure this field has no more than {max} characters."),
        );
    }
}

/// Blank is allowed; anything else must be an absolute URL with a host.
fn optional_url(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    let valid = url::Url::parse(raw)
        .map(|u| URL_SCHEMES.contains(&u.scheme()) && u.has_host())
        .unwrap_or(false);
    if !valid {
        errors.add(field, "Enter a valid URL.");
    }
}

fn date_order(errors: &mut FieldErrors, start: NaiveDate, end: Option<NaiveDate>) {
    if end.is_some_and(|end| end < start) {
        errors.add("end_date", "End date cannot be before start date.");
    }
}

fn current_without_end(
    errors: &mut FieldErrors,
    is_current: bool,
    end: Option<NaiveDate>,
    message: &str,
) {
    if is_current && end.is_some() {
        errors.add("is_current", message);
    }
}

fn check_skill(input: &CreateSkill, errors: &mut FieldErrors) -> Option<SkillCategory> {
    required_text(errors, "name", &input.name, Some(100));
    let category = SkillCategory::from_code(&input.category);
    if category.is_none() {
        errors.add(
            "category",
            format!("\"{}\" is not a valid choice.", input.category),
        );
    }
    if !(1..=5).contains(&input.proficiency_level) {
        errors.add(
            "proficiency_level",
            "Proficiency level must be between 1 and 5.",
        );
    }
    if input.years_experience < 0.0 {
        errors.add(
            "years_experience",
            "Years of experience cannot be negative.",
        );
    }
    category
}

impl Validate for CreateSkill {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_skill(self, &mut errors);
        errors.into_result()
    }
}

impl CreateSkill {
    /// Validate and resolve the category code in one pass.
    pub fn validated_category(&self) -> Result<SkillCategory, FieldErrors> {
        let mut errors = FieldErrors::default();
        match check_skill(self, &mut errors) {
            Some(category) if errors.is_empty() => Ok(category),
            _ => Err(errors),
        }
    }
}

impl Validate for CreateProject {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        required_text(&mut errors, "title", &self.title, Some(200));
        required_text(&mut errors, "description", &self.description, None);
        required_text(
            &mut errors,
            "short_description",
            &self.short_description,
            Some(300),
        );
        required_text(&mut errors, "technologies", &self.technologies, Some(500));
        optional_url(&mut errors, "github_url", self.github_url.as_deref());
        optional_url(&mut errors, "live_url", self.live_url.as_deref());
        date_order(&mut errors, self.start_date, self.end_date);
        errors.into_result()
    }
}

impl Validate for CreateExperience {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        required_text(&mut errors, "company", &self.company, Some(200));
        required_text(&mut errors, "position", &self.position, Some(200));
        required_text(&mut errors, "description", &self.description, None);
        required_text(&mut errors, "location", &self.location, Some(200));
        optional_url(&mut errors, "company_url", self.company_url.as_deref());
        current_without_end(
            &mut errors,
            self.is_current,
            self.end_date,
            "Current position cannot have an end date.",
        );
        date_order(&mut errors, self.start_date, self.end_date);
        errors.into_result()
    }
}

impl Validate for CreateEducation {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        required_text(&mut errors, "institution", &self.institution, Some(200));
        required_text(&mut errors, "degree", &self.degree, Some(200));
        required_text(&mut errors, "field_of_study", &self.field_of_study, Some(200));
        required_text(&mut errors, "location", &self.location, Some(200));
        if self.gpa.is_some_and(|gpa| !(0.0..=4.0).contains(&gpa)) {
            errors.add("gpa", "GPA must be between 0.0 and 4.0.");
        }
        current_without_end(
            &mut errors,
            self.is_current,
            self.end_date,
            "Current education cannot have an end date.",
        );
        date_order(&mut errors, self.start_date, self.end_date);
        errors.into_result()
    }
}

impl Validate for CreateContact {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if !EmailAddress::is_valid(&self.email) {
            errors.add("email", "Enter a valid email address.");
        }
        max_len(&mut errors, "phone", &self.phone, 20);
        required_text(&mut errors, "location", &self.location, Some(200));
        optional_url(&mut errors, "linkedin_url", self.linkedin_url.as_deref());
        optional_url(&mut errors, "github_url", self.github_url.as_deref());
        optional_url(&mut errors, "twitter_url", self.twitter_url.as_deref());
        optional_url(&mut errors, "website_url", self.website_url.as_deref());
        optional_url(&mut errors, "resume_url", self.resume_url.as_deref());
        errors.into_result()
    }
}

impl Validate for CreateAbout {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        required_text(&mut errors, "name", &self.name, Some(200));
        required_text(&mut errors, "title", &self.title, Some(200));
        required_text(&mut errors, "bio", &self.bio, None);
        errors.into_result()
    }
}
