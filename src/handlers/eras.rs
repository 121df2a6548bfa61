//! Era routes.

use crate::catalog::ERAS;
use crate::error::AppError;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::list(state.store.as_ref(), &ERAS).await?;
    Ok(Json(rows))
}
