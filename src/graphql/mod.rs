pub mod context;
pub mod handler;
pub mod schema;

pub use context::GraphQLContext;
pub use schema::{Schema, create_schema};
