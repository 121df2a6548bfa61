//! Genre routes. Every genre row embeds its era.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::service::CatalogService;
use crate::sql::Filter;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::genres(state.store.as_ref(), &[]).await?;
    Ok(Json(rows))
}

pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::genres(
        state.store.as_ref(),
        &[Filter::Exact { column: "genreId", value: id.into() }],
    )
    .await?;
    Ok(Json(rows))
}

/// Genres used in one painting, via the junction table.
pub async fn by_painting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::genres_for_painting(state.store.as_ref(), id).await?;
    Ok(Json(rows))
}
