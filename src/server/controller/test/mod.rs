//! Resolver tests executing requests against the full schema.

use async_graphql::{Request, Response, Value};
use sea_orm::DatabaseConnection;

use crate::server::{
    middleware::auth::AuthContext,
    model::user::User,
    schema::{build_schema, AppSchema},
};
use test_utils::{builder::TestBuilder, factory};


/// Executes a request as the given caller.
async fn execute(schema: &AppSchema, query: &str, caller: Option<&entity::user::Model>) -> Response {
    let auth = match caller {
        Some(user) => AuthContext::authenticated(User::from_entity(user.clone())),
        None => AuthContext::anonymous(),
    };

    schema.execute(Request::new(query).data(auth)).await
}

fn schema(db: &DatabaseConnection) -> AppSchema {
    build_schema(db.clone())
}

/// `extensions.code` of the first error in a response.
fn error_code(response: &Response) -> Option<String> {
    let error = response.errors.first()?;
    match error.extensions.as_ref()?.get("code")? {
        Value::String(code) => Some(code.clone()),
        _ => None,
    }
}

fn data_json(response: Response) -> serde_json::Value {
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}
