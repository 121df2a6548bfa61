//! The /api dispatch table. Every route is one GET read query with at most one
//! filter strategy; results are raw JSON row arrays.

use crate::handlers::{artists, counts, eras, galleries, genres, paintings};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/eras", get(eras::list))
        .route("/galleries", get(galleries::list))
        .route("/galleries/:ref", get(galleries::by_id))
        .route("/galleries/country/:substring", get(galleries::by_country))
        .route("/artists", get(artists::list))
        .route("/artists/:ref", get(artists::by_id))
        .route("/artists/search/:substring", get(artists::by_last_name))
        .route("/artists/country/:substring", get(artists::by_nationality))
        .route("/paintings", get(paintings::list))
        .route("/paintings/sort/:field", get(paintings::sorted))
        .route("/paintings/:ref", get(paintings::by_id))
        .route("/paintings/search/:substring", get(paintings::by_title))
        .route("/paintings/years/:start/:end", get(paintings::by_year_range))
        .route("/paintings/galleries/:ref", get(paintings::by_gallery))
        .route("/paintings/artist/:ref", get(paintings::by_artist))
        .route(
            "/paintings/artists/country/:substring",
            get(paintings::by_artist_nationality),
        )
        .route("/paintings/genre/:ref", get(paintings::by_genre))
        .route("/paintings/era/:ref", get(paintings::by_era))
        .route("/genres", get(genres::list))
        .route("/genres/:ref", get(genres::by_id))
        .route("/genres/painting/:ref", get(genres::by_painting))
        .route("/counts/genres", get(counts::genres))
        .route("/counts/artists", get(counts::artists))
        .route("/counts/topgenres/:ref", get(counts::top_genres))
        .with_state(state)
}
