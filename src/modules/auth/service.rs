use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, LoginRequest, RegisterRequest};

const USER_COLUMNS: &str = "id, email, password_hash, name, role, created_at, updated_at";

/// The single 401 used for every credential failure. Unknown email,
/// password-less account, and wrong password are indistinguishable to the
/// caller so the endpoint leaks no account-enumeration signal.
fn invalid_credentials() -> AppError {
    AppError::unauthorized(anyhow::anyhow!("Invalid credentials"))
}

fn email_in_use() -> AppError {
    AppError::conflict(anyhow::anyhow!("Email already in use"))
}

pub struct AuthService;

impl AuthService {
    /// Registers a new user and issues their first token.
    ///
    /// Exactly one store write on success; role is always `USER`. A
    /// concurrent register with the same email loses the race at the
    /// unique constraint and gets the same conflict as the pre-insert
    /// check.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let existing =
            sqlx::query_scalar::<_, uuid::Uuid>("SELECT id FROM users WHERE email = $1")
                .bind(&dto.email)
                .fetch_optional(db)
                .await?;

        if existing.is_some() {
            return Err(email_in_use());
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash, name) VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return email_in_use();
                }
            }
            AppError::internal(e)
        })?;

        let token = create_access_token(user.id, user.role, jwt_config)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Authenticates a user and issues a token snapshotting their current
    /// role. No store writes.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(invalid_credentials)?;

        // A NULL hash means no password-based login exists for this account.
        let hash = user.password_hash.as_deref().ok_or_else(invalid_credentials)?;

        // A malformed stored digest counts as a mismatch, not a 500.
        let valid = verify_password(&dto.password, hash).unwrap_or(false);
        if !valid {
            return Err(invalid_credentials());
        }

        let token = create_access_token(user.id, user.role, jwt_config)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }
}
