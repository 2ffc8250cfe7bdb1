//! User data models.
//!
//! [`User`] is the full database row, including the password hash; it
//! never leaves the process. [`PublicUser`] is the view returned by the
//! REST auth endpoints and the GraphQL `me` query.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// System role assigned to a user.
///
/// Defaults to `USER` at registration and is never client-settable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    juniper::GraphQLEnum,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// A user row as stored.
///
/// `password_hash` is `None` for accounts without password-based login
/// (externally provisioned); such accounts cannot authenticate through
/// `/auth/login`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The externally visible user view. Never carries the password hash.
#[derive(Debug, Clone, Serialize, FromRow, juniper::GraphQLObject)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}
