use anyhow::Context;
use std::env;

/// Where bearer tokens come from and what they must claim.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub certs_url: String,
    pub issuer: String,
    pub audience: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - AUTH_CERTS_URL: JSON map of key id to PEM certificate (required)
    /// - AUTH_ISSUER: expected `iss` claim (required)
    /// - AUTH_AUDIENCE: expected `aud` claim (required)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            certs_url: env::var("AUTH_CERTS_URL").context("AUTH_CERTS_URL must be set")?,
            issuer: env::var("AUTH_ISSUER").context("AUTH_ISSUER must be set")?,
            audience: env::var("AUTH_AUDIENCE").context("AUTH_AUDIENCE must be set")?,
        })
    }
}
