use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::users::model::{PublicUser, Role};

/// JWT claims: subject id, role snapshot, and expiry.
///
/// Immutable once issued. A role change on the user record only takes
/// effect when the token expires and a new one is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub name: Option<String>,
}

// Login only checks shape, not the register-time password policy: an old
// account with a shorter password must still be able to log in.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}
