use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use juniper::http::GraphQLRequest;

use crate::middleware::identity::Identity;
use crate::state::AppState;

use super::context::GraphQLContext;

/// GraphQL POST endpoint.
///
/// Builds the per-operation context from the pool and whatever identity
/// the route middleware attached. The route sits behind enforced
/// authentication, so by the time this runs the identity extension is
/// present; the context still carries an `Option` because the resolvers
/// own the authorization decision.
pub async fn graphql_handler(
    State(state): State<AppState>,
    identity: Option<Extension<Identity>>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let context = GraphQLContext::new(state.db.clone(), identity.map(|Extension(i)| i));

    let response = request.execute(&state.schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}
