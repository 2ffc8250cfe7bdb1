use std::env;

use anyhow::{Context, bail};

/// Minimum accepted length for the signing secret. Startup fails if the
/// configured secret is shorter.
pub const MIN_SECRET_LEN: usize = 10;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Loads the JWT configuration from `JWT_SECRET` and
    /// `JWT_ACCESS_EXPIRY` (seconds, default 1 hour).
    ///
    /// There is no fallback secret: a missing or too-short `JWT_SECRET`
    /// aborts startup rather than running with a guessable key.
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.len() < MIN_SECRET_LEN {
            bail!("JWT_SECRET must be at least {MIN_SECRET_LEN} characters");
        }

        Ok(Self {
            secret,
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
        })
    }
}
