//! Traversals of the PaintingGenres junction table.
//!
//! These joins are outside what the structured builder expresses, so they assemble
//! their SQL here; identifiers still come from the static descriptors and every
//! caller-supplied value is bound as a parameter.

use super::builder::{embed_subquery, quoted, QueryBuf};
use crate::catalog::{GENRES, GENRE_ERA, PAINTINGS, PAINTING_GENRES};
use serde_json::Value;

/// Genres attached to one painting, era embedded, ordered by genre name.
pub fn genres_for_painting(painting_id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(painting_id));
    let genre_cols: Vec<String> = GENRES
        .columns
        .iter()
        .map(|c| format!("g.{}", quoted(c.name)))
        .collect();
    q.sql = format!(
        "SELECT {cols}, {era} FROM {genres} g JOIN {pg} pg ON pg.{gid} = g.{gid} \
         WHERE pg.{pid} = ${n}::int ORDER BY g.{name} ASC",
        cols = genre_cols.join(", "),
        era = embed_subquery(&GENRE_ERA, "g"),
        genres = quoted(GENRES.table),
        pg = quoted(PAINTING_GENRES.table),
        gid = quoted("genreId"),
        pid = quoted("paintingId"),
        n = n,
        name = quoted("genreName"),
    );
    q
}

/// Distinct paintings carrying one genre: id, title, year, ordered by year of work.
pub fn paintings_for_genre(genre_id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(genre_id));
    q.sql = format!(
        "SELECT DISTINCT p.{pid}, p.{title}, p.{year} FROM {paintings} p \
         JOIN {pg} pg ON pg.{pid} = p.{pid} \
         WHERE pg.{gid} = ${n}::int ORDER BY p.{year} ASC",
        pid = quoted("paintingId"),
        title = quoted("title"),
        year = quoted("yearOfWork"),
        paintings = quoted(PAINTINGS.table),
        pg = quoted(PAINTING_GENRES.table),
        gid = quoted("genreId"),
        n = n,
    );
    q
}

/// Distinct paintings whose genres belong to one era, ordered by year of work.
pub fn paintings_for_era(era_id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(era_id));
    q.sql = format!(
        "SELECT DISTINCT p.{pid}, p.{title}, p.{year} FROM {paintings} p \
         JOIN {pg} pg ON pg.{pid} = p.{pid} \
         JOIN {genres} g ON g.{gid} = pg.{gid} \
         WHERE g.{eid} = ${n}::int ORDER BY p.{year} ASC",
        pid = quoted("paintingId"),
        title = quoted("title"),
        year = quoted("yearOfWork"),
        paintings = quoted(PAINTINGS.table),
        pg = quoted(PAINTING_GENRES.table),
        genres = quoted(GENRES.table),
        gid = quoted("genreId"),
        eid = quoted("eraId"),
        n = n,
    );
    q
}
