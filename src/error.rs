use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

use crate::validation::FieldErrors;

/// Every failure a request can end in. Each variant maps to exactly one
/// HTTP status; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    /// A composite read (summary or stats) failed. Carries no partial data.
    #[error("{0}")]
    Aggregation(String),

    #[error("{0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        // A concurrent write can slip past the uniqueness pre-check; the
        // database constraint still catches it.
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return ApiError::Conflict(format!("Duplicate value violates a unique constraint: {detail}"));
        }
        match err {
            DbErr::RecordNotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Database(other),
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Aggregation(_) | ApiError::Internal(_) | ApiError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            ApiError::Validation(errors) => builder.json(serde_json::json!({
                "errors": errors,
            })),
            // Details stay in the log; clients get a fixed message.
            ApiError::Internal(_) | ApiError::Database(_) => {
                error!("{self}");
                builder.json(serde_json::json!({
                    "error": "Internal server error",
                }))
            }
            other => builder.json(serde_json::json!({
                "error": other.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn statuses_follow_the_taxonomy() {
        let mut errors = FieldErrors::default();
        errors.add("name", "This field may not be blank.");

        assert_eq!(
            ApiError::Validation(errors).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Aggregation("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn record_not_found_becomes_not_found() {
        let err = ApiError::from(DbErr::RecordNotFound("Skill not found".into()));
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Skill not found"));
    }

    #[actix_web::test]
    async fn validation_body_maps_fields_to_messages() {
        let mut errors = FieldErrors::default();
        errors.add("gpa", "GPA must be between 0.0 and 4.0.");

        let response = ApiError::Validation(errors).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["errors"]["gpa"], "GPA must be between 0.0 and 4.0.");
    }

    #[actix_web::test]
    async fn database_failures_are_opaque() {
        let err = ApiError::from(DbErr::Custom("no such table: education".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({"error": "Internal server error"}));
    }
}
