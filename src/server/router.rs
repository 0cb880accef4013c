use axum::{routing::get, Router};

use crate::server::{
    schema::{graphiql, graphql_handler},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", get(graphiql).post(graphql_handler))
}
