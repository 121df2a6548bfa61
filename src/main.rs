//! Server bootstrap: env config, connection pool, route tables.

use axum::Router;
use musea::{api_routes, common_routes, AppState, PgStore};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("musea=info".parse()?))
        .init();

    let database_url = std::env::var("DATABASE_URL")?;
    // Bounded acquire: a saturated or unreachable store fails the request rather
    // than hanging it indefinitely.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await?;

    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
    };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
