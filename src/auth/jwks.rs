use jsonwebtoken::{Algorithm, DecodingKey, TokenData, Validation, decode, decode_header};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const KEY_TTL: Duration = Duration::from_secs(3600);

#[derive(Clone, Debug)]
struct JwksKeyData {
    x: String,
    y: String,
    algorithm: Algorithm,
}

/// Remote EC signing keys, fetched on demand and cached by `kid`.
#[derive(Clone)]
pub struct JwksCache {
    cache: Arc<Cache<String, JwksKeyData>>,
    jwks_url: String,
    client: reqwest::Client,
    api_key: Option<String>,
}

impl JwksCache {
    pub fn new(jwks_url: &str, api_key: Option<String>) -> Self {
        let cache = Arc::new(
            Cache::builder()
                .time_to_live(KEY_TTL)
                .max_capacity(10)
                .build(),
        );

        Self {
            cache,
            jwks_url: jwks_url.to_string(),
            client: reqwest::Client::new(),
            api_key,
        }
    }

    async fn fetch_jwks(&self) -> Result<serde_json::Value, String> {
        debug!("Fetching JWKS from {}", self.jwks_url);

        let mut request = self.client.get(&self.jwks_url);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Failed to fetch JWKS: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Failed to fetch JWKS: HTTP {status}"));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| format!("Failed to parse JWKS JSON: {e}"))
    }

    async fn get_key_data(&self, kid: &str) -> Result<JwksKeyData, String> {
        if let Some(cached) = self.cache.get(kid).await {
            return Ok(cached);
        }

        let jwks = self.fetch_jwks().await?;
        let key_data = parse_key(&jwks, kid)?;

        self.cache.insert(kid.to_string(), key_data.clone()).await;
        Ok(key_data)
    }

    pub async fn validate_token(
        &self,
        token: &str,
    ) -> Result<TokenData<super::jwt::Claims>, String> {
        let header = decode_header(token).map_err(|e| format!("Failed to decode header: {e}"))?;
        let kid = header.kid.ok_or("No 'kid' in token header")?;

        let key_data = self.get_key_data(&kid).await?;

        let decoding_key = DecodingKey::from_ec_components(&key_data.x, &key_data.y)
            .map_err(|e| format!("Failed to create decoding key: {e}"))?;

        let mut validation = Validation::new(key_data.algorithm);
        validation.validate_aud = false;

        decode::<super::jwt::Claims>(token, &decoding_key, &validation)
            .map_err(|e| format!("Token validation failed: {e}"))
    }
}

/// Pick the key with `kid` out of a JWKS document.
fn parse_key(jwks: &serde_json::Value, kid: &str) -> Result<JwksKeyData, String> {
    let keys = jwks["keys"].as_array().ok_or("No keys in JWKS")?;

    let key = keys
        .iter()
        .find(|k| k["kid"].as_str() == Some(kid))
        .ok_or(format!("Key with kid={kid} not found in JWKS"))?;

    let x = key["x"].as_str().ok_or("Missing 'x' in JWK")?.to_string();
    let y = key["y"].as_str().ok_or("Missing 'y' in JWK")?.to_string();

    let algorithm = match key["alg"].as_str() {
        Some("ES384") => Algorithm::ES384,
        _ => Algorithm::ES256,
    };

    Ok(JwksKeyData { x, y, algorithm })
}
