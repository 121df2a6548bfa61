//! Artist routes: key lookup, last-name search, nationality search.

use crate::catalog::ARTISTS;
use crate::error::AppError;
use crate::handlers::{normalize_substring, parse_id};
use crate::service::CatalogService;
use crate::sql::Filter;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::list(state.store.as_ref(), &ARTISTS).await?;
    Ok(Json(rows))
}

pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::list_filtered(
        state.store.as_ref(),
        &ARTISTS,
        Filter::Exact { column: "artistId", value: id.into() },
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_last_name(
    State(state): State<AppState>,
    Path(substring): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::list_filtered(
        state.store.as_ref(),
        &ARTISTS,
        Filter::Contains {
            column: "lastName",
            needle: normalize_substring(&substring),
        },
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_nationality(
    State(state): State<AppState>,
    Path(substring): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::list_filtered(
        state.store.as_ref(),
        &ARTISTS,
        Filter::Contains {
            column: "nationality",
            needle: normalize_substring(&substring),
        },
    )
    .await?;
    Ok(Json(rows))
}
