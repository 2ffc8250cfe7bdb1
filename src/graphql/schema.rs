//! GraphQL schema definition.
//!
//! Queries degrade gracefully for anonymous contexts (`me` → null,
//! `myProgress` → empty list, `modules` → full listing); mutations go
//! through the authorization policy and surface `Not authenticated` /
//! `Not authorized` as field errors rather than transport status codes.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode, graphql_value};
use uuid::Uuid;

use crate::modules::courses::model::Module;
use crate::modules::courses::service::CourseService;
use crate::modules::progress::model::UserModule;
use crate::modules::progress::service::ProgressService;
use crate::modules::users::model::PublicUser;
use crate::modules::users::service::UserService;
use crate::policy::{Action, authorize};
use crate::utils::errors::{AppError, PolicyError};

use super::context::GraphQLContext;

fn app_error(err: AppError) -> FieldError {
    FieldError::new(err.error.to_string(), graphql_value!(null))
}

fn policy_error(err: PolicyError) -> FieldError {
    FieldError::new(err.to_string(), graphql_value!(null))
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// The authenticated user's profile, or null when anonymous.
    async fn me(#[graphql(context)] ctx: &GraphQLContext) -> FieldResult<Option<PublicUser>> {
        let Some(identity) = &ctx.identity else {
            return Ok(None);
        };
        UserService::find_public(&ctx.db, identity.subject)
            .await
            .map_err(app_error)
    }

    /// All course modules, regardless of identity.
    async fn modules(#[graphql(context)] ctx: &GraphQLContext) -> FieldResult<Vec<Module>> {
        CourseService::list(&ctx.db).await.map_err(app_error)
    }

    /// The authenticated user's progress rows; empty when anonymous.
    async fn my_progress(#[graphql(context)] ctx: &GraphQLContext) -> FieldResult<Vec<UserModule>> {
        let Some(identity) = &ctx.identity else {
            return Ok(Vec::new());
        };
        ProgressService::list_for_user(&ctx.db, identity.subject)
            .await
            .map_err(app_error)
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Create a course module. ADMIN only.
    async fn create_module(
        #[graphql(context)] ctx: &GraphQLContext,
        title: String,
        description: String,
    ) -> FieldResult<Module> {
        authorize(ctx.identity.as_ref(), Action::CreateModule).map_err(policy_error)?;
        CourseService::create(&ctx.db, &title, &description)
            .await
            .map_err(app_error)
    }

    /// Upsert the caller's progress for a module. Any authenticated role.
    async fn update_progress(
        #[graphql(context)] ctx: &GraphQLContext,
        module_id: Uuid,
        progress: i32,
    ) -> FieldResult<UserModule> {
        let identity =
            authorize(ctx.identity.as_ref(), Action::UpdateProgress).map_err(policy_error)?;
        ProgressService::upsert(&ctx.db, identity.subject, module_id, progress)
            .await
            .map_err(app_error)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
