use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::jwks::JwksCache;
use crate::auth::jwt::{self, Claims};
use crate::config::WriteAuthConfig;
use crate::error::ApiError;

/// Write policy registered as app data. Reads never consult it.
#[derive(Clone)]
pub enum WriteAuth {
    Open,
    Secret(String),
    Jwks(Arc<JwksCache>),
}

impl From<&WriteAuthConfig> for WriteAuth {
    fn from(config: &WriteAuthConfig) -> Self {
        match config {
            WriteAuthConfig::Off => WriteAuth::Open,
            WriteAuthConfig::Secret { secret } => WriteAuth::Secret(secret.clone()),
            WriteAuthConfig::Jwks { url, api_key } => {
                WriteAuth::Jwks(Arc::new(JwksCache::new(url, api_key.clone())))
            }
        }
    }
}

/// Proof that the caller may write. Holds the token claims when writes are
/// gated, `None` when they are open.
pub struct WriteAccess(pub Option<Claims>);

impl FromRequest for WriteAccess {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let policy = req
                .app_data::<web::Data<WriteAuth>>()
                .ok_or_else(|| ApiError::Internal("Write policy not configured".to_string()))?
                .clone();

            let claims = match policy.get_ref() {
                WriteAuth::Open => return Ok(WriteAccess(None)),
                WriteAuth::Secret(secret) => {
                    let token = bearer_token(&req).await?;
                    jwt::validate_token(&token, secret)
                }
                WriteAuth::Jwks(cache) => {
                    let token = bearer_token(&req).await?;
                    cache.validate_token(&token).await.map(|data| data.claims)
                }
            }
            .map_err(|e| {
                warn!(path = %req.path(), "Rejected write: {e}");
                ApiError::Unauthorized(format!("Invalid token: {e}"))
            })?;

            debug!(principal = claims.principal(), path = %req.path(), "Write authorised");
            Ok(WriteAccess(Some(claims)))
        })
    }
}

async fn bearer_token(req: &HttpRequest) -> Result<String, ApiError> {
    BearerAuth::extract(req)
        .await
        .map(|bearer| bearer.token().to_string())
        .map_err(|_| {
            warn!(path = %req.path(), "Rejected write: missing bearer token");
            ApiError::Unauthorized("Authorization header must be: Bearer <token>".to_string())
        })
}
