use sqlx::PgPool;

use crate::middleware::identity::Identity;

/// Per-operation GraphQL context.
///
/// Carries the store handle and exactly the identity the request
/// middleware attached (or `None`). Resolvers never touch the transport
/// layer; this context is all they see, which keeps the authorization
/// policy identical across the REST and GraphQL surfaces.
pub struct GraphQLContext {
    pub db: PgPool,
    pub identity: Option<Identity>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(db: PgPool, identity: Option<Identity>) -> Self {
        Self { db, identity }
    }
}
