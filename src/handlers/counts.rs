//! Aggregate count routes.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn genres(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::genre_counts(state.store.as_ref()).await?;
    Ok(Json(rows))
}

pub async fn artists(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::artist_counts(state.store.as_ref()).await?;
    Ok(Json(rows))
}

pub async fn top_genres(
    State(state): State<AppState>,
    Path(threshold): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let threshold = parse_id(&threshold)?;
    let rows = CatalogService::top_genres(state.store.as_ref(), threshold).await?;
    Ok(Json(rows))
}
