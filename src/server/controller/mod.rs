//! GraphQL resolvers.
//!
//! Each submodule contributes a query and/or mutation object for one domain plus
//! the GraphQL object wrappers around its domain models. Resolvers check access
//! through the request's `AuthContext`, convert inputs into service params and wrap
//! service results. Errors leave through `GraphQlResultExt::into_graphql` so every
//! failure carries an `extensions.code`.

pub mod auth;
pub mod author;
pub mod game;
pub mod review;
pub mod user;

use async_graphql::{Context, MergedObject};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::middleware::auth::AuthContext;

static ANONYMOUS: AuthContext = AuthContext::anonymous();

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    auth::AuthQuery,
    author::AuthorQuery,
    game::GameQuery,
    review::ReviewQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    auth::AuthMutation,
    user::UserMutation,
    game::GameMutation,
    review::ReviewMutation,
);

/// Database connection registered on the schema.
fn db<'c>(ctx: &Context<'c>) -> async_graphql::Result<&'c DatabaseConnection> {
    ctx.data::<DatabaseConnection>()
}

/// Session of the current HTTP request.
fn session<'c>(ctx: &Context<'c>) -> async_graphql::Result<&'c Session> {
    ctx.data::<Session>()
}

/// Caller of the current request; anonymous when the request carries no context.
fn caller<'c>(ctx: &Context<'c>) -> &'c AuthContext {
    ctx.data_opt::<AuthContext>().unwrap_or(&ANONYMOUS)
}

#[cfg(test)]
mod test;
