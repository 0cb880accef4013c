//! GraphQL schema construction and the HTTP endpoint executing it.

use async_graphql::{http::GraphiQLSource, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::{MutationRoot, QueryRoot},
    error::AppError,
    middleware::auth::AuthContext,
    state::AppState,
};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the executable schema.
///
/// The database connection is registered as schema data; the session and the
/// caller's `AuthContext` are attached per request by `graphql_handler`.
pub fn build_schema(db: DatabaseConnection) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(db)
        .finish()
}

/// Executes a GraphQL request on behalf of the session's user.
///
/// # Returns
/// - `Ok(GraphQLResponse)` - Executed response; resolver failures are GraphQL errors
/// - `Err(AppError)` - The caller could not be resolved from the session
pub async fn graphql_handler(
    State(state): State<AppState>,
    session: Session,
    request: GraphQLRequest,
) -> Result<GraphQLResponse, AppError> {
    let auth = AuthContext::from_session(&state.db, &session).await?;

    let request = request.into_inner().data(session).data(auth);

    Ok(state.schema.execute(request).await.into())
}

/// Serves the GraphiQL explorer.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
