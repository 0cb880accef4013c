mod server;

use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config, error::AppError, router, schema::build_schema, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let schema = build_schema(db.clone());

    let app = router::router()
        .with_state(AppState::new(db, schema))
        .layer(session)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("GraphQL server listening on http://{}/graphql", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
