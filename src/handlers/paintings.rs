//! Painting routes. Every row query embeds the related artist and gallery.

use crate::error::AppError;
use crate::handlers::{normalize_substring, parse_id};
use crate::service::CatalogService;
use crate::sql::{Filter, OrderBy};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

/// Whitelisted fields for /api/paintings/sort/:field.
enum SortField {
    Title,
    Year,
}

impl SortField {
    fn parse(segment: &str) -> Result<Self, AppError> {
        match segment.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "year" => Ok(SortField::Year),
            _ => Err(AppError::validation(
                "invalid sorting field, use 'title' or 'year'",
            )),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Year => "yearOfWork",
        }
    }
}

fn parse_year_range(start: &str, end: &str) -> Result<(i64, i64), AppError> {
    let lo = parse_id(start)?;
    let hi = parse_id(end)?;
    if lo > hi {
        return Err(AppError::validation(format!(
            "start year {} cannot be greater than end year {}",
            lo, hi
        )));
    }
    Ok((lo, hi))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows =
        CatalogService::paintings(state.store.as_ref(), &[], &[OrderBy::asc("title")]).await?;
    Ok(Json(rows))
}

pub async fn sorted(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let field = SortField::parse(&field)?;
    let rows =
        CatalogService::paintings(state.store.as_ref(), &[], &[OrderBy::asc(field.column())])
            .await?;
    Ok(Json(rows))
}

pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::paintings(
        state.store.as_ref(),
        &[Filter::Exact { column: "paintingId", value: id.into() }],
        &[OrderBy::asc("title")],
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_title(
    State(state): State<AppState>,
    Path(substring): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::paintings(
        state.store.as_ref(),
        &[Filter::Contains {
            column: "title",
            needle: normalize_substring(&substring),
        }],
        &[OrderBy::asc("title")],
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_year_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<Value>>, AppError> {
    let (lo, hi) = parse_year_range(&start, &end)?;
    let rows = CatalogService::paintings(
        state.store.as_ref(),
        &[Filter::Between { column: "yearOfWork", lo, hi }],
        &[OrderBy::asc("yearOfWork")],
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_gallery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::paintings(
        state.store.as_ref(),
        &[Filter::Exact { column: "galleryId", value: id.into() }],
        &[OrderBy::asc("title")],
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::paintings(
        state.store.as_ref(),
        &[Filter::Exact { column: "artistId", value: id.into() }],
        &[OrderBy::asc("title")],
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_artist_nationality(
    State(state): State<AppState>,
    Path(substring): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = CatalogService::paintings_by_artist_nationality(
        state.store.as_ref(),
        normalize_substring(&substring),
    )
    .await?;
    Ok(Json(rows))
}

pub async fn by_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::paintings_for_genre(state.store.as_ref(), id).await?;
    Ok(Json(rows))
}

pub async fn by_era(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CatalogService::paintings_for_era(state.store.as_ref(), id).await?;
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_whitelist() {
        assert_eq!(SortField::parse("title").unwrap().column(), "title");
        assert_eq!(SortField::parse("year").unwrap().column(), "yearOfWork");
        assert_eq!(SortField::parse("TITLE").unwrap().column(), "title");
        assert!(SortField::parse("bogus").is_err());
        assert!(SortField::parse("yearOfWork").is_err());
    }

    #[test]
    fn year_range_requires_start_at_most_end() {
        assert_eq!(parse_year_range("1800", "1850").unwrap(), (1800, 1850));
        assert_eq!(parse_year_range("1800", "1800").unwrap(), (1800, 1800));
        assert!(parse_year_range("1900", "1800").is_err());
    }

    #[test]
    fn year_range_requires_numbers() {
        assert!(parse_year_range("abc", "1850").is_err());
        assert!(parse_year_range("1800", "abc").is_err());
    }
}
