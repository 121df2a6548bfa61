//! Read-only query execution: composes the SQL builders with the injected store.

use crate::catalog::{
    EntityDef, ARTISTS, GENRES, GENRE_ERA, PAINTINGS, PAINTING_ARTIST, PAINTING_GALLERY,
};
use crate::error::AppError;
use crate::sql::{self, Filter, JoinFilter, OrderBy};
use crate::store::CatalogStore;
use serde_json::Value;

pub struct CatalogService;

impl CatalogService {
    /// All rows of a flat entity, ordered by primary key.
    pub async fn list(store: &dyn CatalogStore, entity: &EntityDef) -> Result<Vec<Value>, AppError> {
        let q = sql::select(entity, &[], &[]);
        store.fetch_all(&q).await
    }

    /// Flat entity rows under one filter.
    pub async fn list_filtered(
        store: &dyn CatalogStore,
        entity: &EntityDef,
        filter: Filter,
    ) -> Result<Vec<Value>, AppError> {
        let q = sql::select(entity, std::slice::from_ref(&filter), &[]);
        store.fetch_all(&q).await
    }

    /// Paintings with artist and gallery embedded, under optional filters and order.
    pub async fn paintings(
        store: &dyn CatalogStore,
        filters: &[Filter],
        order: &[OrderBy],
    ) -> Result<Vec<Value>, AppError> {
        let q = sql::select_with_embeds(
            &PAINTINGS,
            &[&PAINTING_ARTIST, &PAINTING_GALLERY],
            filters,
            &[],
            order,
        );
        store.fetch_all(&q).await
    }

    /// Paintings whose artist's nationality contains `needle`. Inner join, so
    /// paintings by non-matching artists drop out entirely.
    pub async fn paintings_by_artist_nationality(
        store: &dyn CatalogStore,
        needle: String,
    ) -> Result<Vec<Value>, AppError> {
        let q = sql::select_with_embeds(
            &PAINTINGS,
            &[&PAINTING_ARTIST, &PAINTING_GALLERY],
            &[],
            &[JoinFilter {
                related: &ARTISTS,
                our_key: "artistId",
                their_key: "artistId",
                filter: Filter::Contains { column: "nationality", needle },
            }],
            &[OrderBy::asc("title")],
        );
        store.fetch_all(&q).await
    }

    /// Genres with era embedded, under optional filters.
    pub async fn genres(
        store: &dyn CatalogStore,
        filters: &[Filter],
    ) -> Result<Vec<Value>, AppError> {
        let q = sql::select_with_embeds(&GENRES, &[&GENRE_ERA], filters, &[], &[]);
        store.fetch_all(&q).await
    }

    pub async fn genres_for_painting(
        store: &dyn CatalogStore,
        painting_id: i64,
    ) -> Result<Vec<Value>, AppError> {
        store.fetch_all(&sql::genres_for_painting(painting_id)).await
    }

    pub async fn paintings_for_genre(
        store: &dyn CatalogStore,
        genre_id: i64,
    ) -> Result<Vec<Value>, AppError> {
        store.fetch_all(&sql::paintings_for_genre(genre_id)).await
    }

    pub async fn paintings_for_era(
        store: &dyn CatalogStore,
        era_id: i64,
    ) -> Result<Vec<Value>, AppError> {
        store.fetch_all(&sql::paintings_for_era(era_id)).await
    }

    pub async fn genre_counts(store: &dyn CatalogStore) -> Result<Vec<Value>, AppError> {
        store.fetch_all(&sql::paintings_per_genre()).await
    }

    pub async fn artist_counts(store: &dyn CatalogStore) -> Result<Vec<Value>, AppError> {
        store.fetch_all(&sql::paintings_per_artist()).await
    }

    pub async fn top_genres(
        store: &dyn CatalogStore,
        min_count: i64,
    ) -> Result<Vec<Value>, AppError> {
        store.fetch_all(&sql::top_genres(min_count)).await
    }
}
