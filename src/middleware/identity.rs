//! Per-request identity extraction.
//!
//! One middleware implementation, two instantiations:
//!
//! - [`identity_permissive`]: a missing or invalid token leaves the
//!   request anonymous and lets it proceed. For route groups that do
//!   their own authorization downstream.
//! - [`identity_enforced`]: a missing or invalid token rejects the
//!   request with 401 before any handler logic runs. Fronts `/protected`
//!   and the entire GraphQL endpoint.
//!
//! Token sources: the `Authorization: Bearer <token>` header, or the
//! `token` cookie. The header wins when both are present.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::{AppError, TokenError};
use crate::utils::jwt::verify_token;

/// Name of the cookie checked for a token when no Authorization header
/// is present.
pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMode {
    Permissive,
    Enforced,
}

/// The verified identity attached to a request.
///
/// Derived fresh from the token on every request and carried in request
/// extensions only; never persisted or cached across requests.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: Uuid,
    pub role: Role,
}

impl Identity {
    fn from_claims(claims: &Claims) -> Result<Self, TokenError> {
        let subject = Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Invalid)?;
        Ok(Self {
            subject,
            role: claims.role,
        })
    }
}

/// Reads the identity the middleware attached to the request.
///
/// Rejects with 401 if no identity is present; use
/// `Option<Extension<Identity>>` in handlers that accept anonymous
/// requests.
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Not authenticated")))
    }
}

fn locate_token(req: &Request) -> Option<String> {
    let header_token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string());

    header_token.or_else(|| {
        CookieJar::from_headers(req.headers())
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    })
}

async fn extract_identity(
    state: AppState,
    mut req: Request,
    next: Next,
    mode: IdentityMode,
) -> Result<Response, AppError> {
    let Some(token) = locate_token(&req) else {
        return match mode {
            IdentityMode::Permissive => Ok(next.run(req).await),
            IdentityMode::Enforced => Err(AppError::unauthorized(anyhow::anyhow!(
                "Missing authentication token"
            ))),
        };
    };

    let identity = verify_token(&token, &state.jwt_config)
        .and_then(|claims| Identity::from_claims(&claims));

    match identity {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        Err(err) => match mode {
            IdentityMode::Permissive => Ok(next.run(req).await),
            IdentityMode::Enforced => Err(AppError::unauthorized(err)),
        },
    }
}

pub async fn identity_permissive(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match extract_identity(state, req, next, IdentityMode::Permissive).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn identity_enforced(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match extract_identity(state, req, next, IdentityMode::Enforced).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
