//! Gallery routes: key lookup and country substring search.

use crate::catalog::GALLERIES;
use crate::error::AppError;
use crate::handlers::{normalize_substring, parse_id};
use crate::service::CatalogService;
use crate::sql::Filter;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::list(state.store.as_ref(), &GALLERIES).await?;
    Ok(Json(rows))
}

pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::list_filtered(
        state.store.as_ref(),
        &GALLERIES,
        Filter::Exact { column: "galleryId", value: id.into() },
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_country(
    State(state): State<AppState>,
    Path(substring): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::list_filtered(
        state.store.as_ref(),
        &GALLERIES,
        Filter::Contains {
            column: "galleryCountry",
            needle: normalize_substring(&substring),
        },
    )
    .await?;
    Ok(Json(rows))
}
