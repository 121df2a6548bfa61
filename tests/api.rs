//! Route-level tests: the full router driven through oneshot requests against a
//! recording stub store, so query composition and error mapping are observable
//! without a live database.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use musea::{api_routes, AppError, AppState, CatalogStore, QueryBuf};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct StubStore {
    rows: Vec<Value>,
    fail: bool,
    seen: Mutex<Vec<QueryBuf>>,
}

impl StubStore {
    fn returning(rows: Vec<Value>) -> Arc<Self> {
        Arc::new(StubStore { rows, fail: false, seen: Mutex::new(Vec::new()) })
    }

    fn failing() -> Arc<Self> {
        Arc::new(StubStore { rows: Vec::new(), fail: true, seen: Mutex::new(Vec::new()) })
    }

    fn queries(&self) -> Vec<QueryBuf> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CatalogStore for StubStore {
    async fn fetch_all(&self, query: &QueryBuf) -> Result<Vec<Value>, AppError> {
        self.seen.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(AppError::Db(sqlx::Error::Protocol("connection reset".into())));
        }
        Ok(self.rows.clone())
    }
}

fn app(store: Arc<StubStore>) -> Router {
    let state = AppState { store: store.clone() };
    Router::new().nest("/api", api_routes(state))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let resp = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn eras_returns_raw_row_array() {
    let rows = vec![json!({"eraId": 1, "eraName": "Renaissance", "eraYears": "1400-1600"})];
    let store = StubStore::returning(rows.clone());
    let (status, body) = get(app(store.clone()), "/api/eras").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(rows));
    let seen = store.queries();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].sql.contains(r#"FROM "Eras""#));
}

#[tokio::test]
async fn non_numeric_id_is_rejected_before_dispatch() {
    for uri in [
        "/api/galleries/abc",
        "/api/artists/abc",
        "/api/paintings/genre/abc",
        "/api/genres/painting/abc",
        "/api/counts/topgenres/abc",
    ] {
        let store = StubStore::returning(vec![]);
        let (status, body) = get(app(store.clone()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], json!(true));
        assert!(body["message"].as_str().unwrap().contains("number"));
        assert!(store.queries().is_empty(), "{} dispatched a query", uri);
    }
}

#[tokio::test]
async fn exact_match_binds_the_parsed_key() {
    let store = StubStore::returning(vec![]);
    let (status, _) = get(app(store.clone()), "/api/artists/19").await;
    assert_eq!(status, StatusCode::OK);
    let seen = store.queries();
    assert!(seen[0].sql.contains(r#""artistId" = $1::int"#));
    assert_eq!(seen[0].params, vec![json!(19)]);
}

#[tokio::test]
async fn substring_search_is_case_insensitive() {
    let upper = StubStore::returning(vec![]);
    let lower = StubStore::returning(vec![]);
    get(app(upper.clone()), "/api/galleries/country/SpAiN").await;
    get(app(lower.clone()), "/api/galleries/country/spain").await;
    let (a, b) = (upper.queries(), lower.queries());
    assert_eq!(a[0], b[0]);
    assert_eq!(a[0].params, vec![json!("%spain%")]);
    assert!(a[0].sql.contains(r#""galleryCountry" ILIKE $1"#));
}

#[tokio::test]
async fn paintings_embed_artist_and_gallery_sorted_by_title() {
    let store = StubStore::returning(vec![]);
    get(app(store.clone()), "/api/paintings").await;
    let seen = store.queries();
    assert!(seen[0].sql.contains(r#"AS "artist""#));
    assert!(seen[0].sql.contains(r#"AS "gallery""#));
    assert!(seen[0].sql.ends_with(r#"ORDER BY main."title" ASC"#));
}

#[tokio::test]
async fn sort_route_enforces_field_whitelist() {
    let store = StubStore::returning(vec![]);
    let (status, body) = get(app(store.clone()), "/api/paintings/sort/bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
    assert!(store.queries().is_empty());

    let store = StubStore::returning(vec![]);
    let (status, _) = get(app(store.clone()), "/api/paintings/sort/year").await;
    assert_eq!(status, StatusCode::OK);
    assert!(store.queries()[0].sql.ends_with(r#"ORDER BY main."yearOfWork" ASC"#));
}

#[tokio::test]
async fn year_range_is_inclusive_and_year_ordered() {
    let store = StubStore::returning(vec![]);
    let (status, _) = get(app(store.clone()), "/api/paintings/years/1800/1850").await;
    assert_eq!(status, StatusCode::OK);
    let seen = store.queries();
    assert!(seen[0]
        .sql
        .contains(r#"main."yearOfWork" >= $1::int AND main."yearOfWork" <= $2::int"#));
    assert!(seen[0].sql.ends_with(r#"ORDER BY main."yearOfWork" ASC"#));
    assert_eq!(seen[0].params, vec![json!(1800), json!(1850)]);
}

#[tokio::test]
async fn inverted_year_range_is_rejected() {
    let store = StubStore::returning(vec![]);
    let (status, body) = get(app(store.clone()), "/api/paintings/years/1900/1800").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
    assert!(store.queries().is_empty());

    let store = StubStore::returning(vec![]);
    let (status, _) = get(app(store.clone()), "/api/paintings/years/abc/1850").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn nationality_filter_inner_joins_artists() {
    let store = StubStore::returning(vec![]);
    get(app(store.clone()), "/api/paintings/artists/country/FRENCH").await;
    let seen = store.queries();
    assert!(seen[0].sql.contains(r#"JOIN "Artists" r0"#));
    assert!(seen[0].sql.contains(r#"r0."nationality" ILIKE $1"#));
    assert_eq!(seen[0].params, vec![json!("%french%")]);
}

#[tokio::test]
async fn genre_traversal_orders_by_genre_name() {
    let store = StubStore::returning(vec![]);
    let (status, _) = get(app(store.clone()), "/api/genres/painting/408").await;
    assert_eq!(status, StatusCode::OK);
    let seen = store.queries();
    assert!(seen[0].sql.contains(r#"JOIN "PaintingGenres""#));
    assert!(seen[0].sql.ends_with(r#"ORDER BY g."genreName" ASC"#));
    assert_eq!(seen[0].params, vec![json!(408)]);
}

#[tokio::test]
async fn top_genres_binds_threshold_descending() {
    let store = StubStore::returning(vec![]);
    let (status, _) = get(app(store.clone()), "/api/counts/topgenres/20").await;
    assert_eq!(status, StatusCode::OK);
    let seen = store.queries();
    assert!(seen[0].sql.contains("HAVING"));
    assert!(seen[0].sql.ends_with(r#"ORDER BY "paintingsForGenre" DESC"#));
    assert_eq!(seen[0].params, vec![json!(20)]);
}

#[tokio::test]
async fn count_routes_order_per_route() {
    let store = StubStore::returning(vec![]);
    get(app(store.clone()), "/api/counts/genres").await;
    assert!(store.queries()[0].sql.ends_with(r#"ORDER BY "paintingsForGenre" ASC"#));

    let store = StubStore::returning(vec![]);
    get(app(store.clone()), "/api/counts/artists").await;
    assert!(store.queries()[0].sql.ends_with(r#"ORDER BY "paintingCount" DESC"#));
}

#[tokio::test]
async fn store_failure_maps_to_500_error_body() {
    let store = StubStore::failing();
    let (status, body) = get(app(store), "/api/eras").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["details"], json!("catalog query failed"));
    assert!(body["message"].as_str().unwrap().contains("connection reset"));
}
