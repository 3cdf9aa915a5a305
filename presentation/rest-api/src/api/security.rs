use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use once_cell::sync::Lazy;
use poem::http::header::AUTHORIZATION;
use poem::{Endpoint, Middleware, Request};
use serde::Deserialize;

use business::domain::shared::value_objects::{Caller, UserId};

use crate::config::auth_config::AuthConfig;

const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("auth.certs_fetch_failed: {0}")]
    CertsFetchFailed(String),
    #[error("auth.cert_decode_failed: {0}")]
    CertDecodeFailed(String),
    #[error("auth.invalid_token_header")]
    InvalidHeader,
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.certs_not_loaded")]
    CertsNotLoaded,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.cache_unavailable")]
    CacheUnavailable,
    #[error("auth.token_validation_failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

static CERTS_CACHE: Lazy<RwLock<Option<CachedCerts>>> = Lazy::new(|| RwLock::new(None));

async fn fetch_certs(certs_url: &str) -> Result<HashMap<String, DecodingKey>, TokenError> {
    let response: HashMap<String, String> = reqwest::get(certs_url)
        .await
        .map_err(|e| TokenError::CertsFetchFailed(e.to_string()))?
        .json()
        .await
        .map_err(|e| TokenError::CertsFetchFailed(e.to_string()))?;

    let mut keys = HashMap::new();
    for (kid, pem) in response {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| TokenError::CertDecodeFailed(e.to_string()))?;
        keys.insert(kid, key);
    }

    Ok(keys)
}

/// Makes sure the certificate cache is populated and younger than the TTL.
async fn refresh_certs(certs_url: &str) -> Result<(), TokenError> {
    {
        let cache = CERTS_CACHE
            .read()
            .map_err(|_| TokenError::CacheUnavailable)?;
        if let Some(cached) = cache.as_ref()
            && cached.fetched_at.elapsed() < CACHE_TTL
        {
            return Ok(());
        }
    }

    let keys = fetch_certs(certs_url).await?;

    let mut cache = CERTS_CACHE
        .write()
        .map_err(|_| TokenError::CacheUnavailable)?;
    *cache = Some(CachedCerts {
        keys,
        fetched_at: Instant::now(),
    });
    Ok(())
}

/// Verifies an RS256 token against the cached certificates.
fn verify_token(token: &str, config: &AuthConfig) -> Result<UserId, TokenError> {
    let header = decode_header(token).map_err(|_| TokenError::InvalidHeader)?;
    let kid = header.kid.ok_or(TokenError::MissingKid)?;

    let cache = CERTS_CACHE
        .read()
        .map_err(|_| TokenError::CacheUnavailable)?;
    let cached = cache.as_ref().ok_or(TokenError::CertsNotLoaded)?;
    let decoding_key = cached.keys.get(&kid).ok_or(TokenError::UnknownKid)?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[&config.audience]);
    validation.set_issuer(&[&config.issuer]);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| TokenError::ValidationFailed(e.to_string()))?;

    Ok(UserId::new(token_data.claims.sub))
}

fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the request identity. Any failure leaves the caller anonymous.
pub async fn resolve_caller(authorization: Option<&str>, config: &AuthConfig) -> Caller {
    let Some(token) = authorization.and_then(bearer_token) else {
        return Caller::Anonymous;
    };

    if let Err(e) = refresh_certs(&config.certs_url).await {
        tracing::error!("Failed to load signing certificates: {e}");
        return Caller::Anonymous;
    }

    match verify_token(token, config) {
        Ok(user_id) => Caller::Authenticated(user_id),
        Err(e) => {
            tracing::warn!("Bearer token rejected: {e}");
            Caller::Anonymous
        }
    }
}

/// Attaches a `Caller` to every request.
pub struct Identity {
    config: Arc<AuthConfig>,
}

impl Identity {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl<E: Endpoint> Middleware<E> for Identity {
    type Output = IdentityEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        IdentityEndpoint {
            inner: ep,
            config: self.config.clone(),
        }
    }
}

pub struct IdentityEndpoint<E> {
    inner: E,
    config: Arc<AuthConfig>,
}

impl<E: Endpoint> Endpoint for IdentityEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, mut req: Request) -> poem::Result<Self::Output> {
        let authorization = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let caller = resolve_caller(authorization.as_deref(), &self.config).await;
        req.set_data(caller);

        self.inner.call(req).await
    }
}
