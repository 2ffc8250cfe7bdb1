//! # Learntrack API
//!
//! A learning-progress tracker backend built with Axum, SQLx, and
//! Juniper: user registration/login over REST, and a GraphQL endpoint
//! for course modules and per-user progress.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Env configuration (JWT, database, server)
//! ├── middleware/       # Identity extraction (permissive / enforced)
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration, login, protected probe
//! │   ├── users/       # User entity, roles, public view
//! │   ├── courses/     # Course modules (GraphQL only)
//! │   └── progress/    # Per-user progress upserts (GraphQL only)
//! ├── graphql/          # Schema, context bridge, axum handler
//! ├── policy.rs         # Pure authorization predicate
//! └── utils/            # Errors, JWT codec, password hashing
//! ```
//!
//! ## Authentication
//!
//! Stateless HS256 access tokens carry the user id and a role snapshot.
//! A request's token is taken from the `Authorization: Bearer` header or
//! the `token` cookie (header wins). Identity is derived per request and
//! never outlives it; there is no server-side session store or
//! revocation list.
//!
//! The REST side mixes open routes (`/health`, `/auth/*`) with an
//! enforced `/protected` probe. The GraphQL endpoint is enforced as a
//! whole: every operation requires a valid token, and role checks happen
//! inside resolvers through the same [`policy`] predicate the REST layer
//! uses.

pub mod config;
pub mod graphql;
pub mod middleware;
pub mod modules;
pub mod policy;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
