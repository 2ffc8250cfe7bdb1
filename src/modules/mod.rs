//! Feature modules.
//!
//! Each module follows the same structure where applicable: `model.rs`
//! (entities and DTOs), `service.rs` (business logic against the pool),
//! and for REST-facing modules `controller.rs` / `router.rs`. The
//! courses and progress modules are exposed through GraphQL only.

pub mod auth;
pub mod courses;
pub mod progress;
pub mod users;
