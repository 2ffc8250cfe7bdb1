//! Environment-driven configuration.
//!
//! Each submodule loads one concern from environment variables:
//!
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: signing secret and token expiry (fails fast on a weak secret)
//! - [`server`]: bind port

pub mod database;
pub mod jwt;
pub mod server;
