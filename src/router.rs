use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::graphql::handler::graphql_handler;
use crate::middleware::identity::identity_enforced;
use crate::modules::auth::controller::protected;
use crate::modules::auth::router::init_auth_router;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Assembles the application router.
///
/// `/health` and `/auth/*` carry no identity extraction at all. The
/// `/protected` probe and the whole GraphQL endpoint sit behind the
/// enforced extractor: requests without a valid token are rejected at
/// the transport boundary before any handler or resolver runs.
pub fn init_router(state: AppState) -> Router {
    let enforced_routes = Router::new()
        .route("/protected", get(protected))
        .route("/graphql", post(graphql_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            identity_enforced,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/auth", init_auth_router())
        .merge(enforced_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
