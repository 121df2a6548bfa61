//! Fixed aggregate count queries.
//!
//! GROUP BY / HAVING composition is outside what the structured builder can
//! express, so these three queries assemble their SQL directly. Caller-supplied
//! values are always bound, never interpolated into the text.

use super::builder::{quoted, QueryBuf};
use crate::catalog::{ARTISTS, GENRES, PAINTINGS, PAINTING_GENRES};
use serde_json::Value;

fn genre_count_base() -> String {
    format!(
        "SELECT g.{name}, COUNT(p.{pid}) AS {count} FROM {paintings} p \
         JOIN {pg} pg ON pg.{pid} = p.{pid} \
         JOIN {genres} g ON g.{gid} = pg.{gid} \
         GROUP BY g.{name}",
        name = quoted("genreName"),
        pid = quoted("paintingId"),
        count = quoted("paintingsForGenre"),
        paintings = quoted(PAINTINGS.table),
        pg = quoted(PAINTING_GENRES.table),
        genres = quoted(GENRES.table),
        gid = quoted("genreId"),
    )
}

/// Painting count per genre, fewest first.
pub fn paintings_per_genre() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "{} ORDER BY {} ASC",
        genre_count_base(),
        quoted("paintingsForGenre")
    );
    q
}

/// Painting count per artist (first and last name concatenated), most first.
pub fn paintings_per_artist() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT (a.{first} || ' ' || a.{last}) AS {name}, COUNT(p.{pid}) AS {count} \
         FROM {artists} a \
         JOIN {paintings} p ON p.{aid} = a.{aid} \
         GROUP BY {name} ORDER BY {count} DESC",
        first = quoted("firstName"),
        last = quoted("lastName"),
        name = quoted("artistName"),
        pid = quoted("paintingId"),
        count = quoted("paintingCount"),
        artists = quoted(ARTISTS.table),
        paintings = quoted(PAINTINGS.table),
        aid = quoted("artistId"),
    );
    q
}

/// Painting count per genre, restricted to genres at or above `min_count`, most first.
pub fn top_genres(min_count: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(min_count));
    q.sql = format!(
        "{base} HAVING COUNT(p.{pid}) >= ${n} ORDER BY {count} DESC",
        base = genre_count_base(),
        pid = quoted("paintingId"),
        n = n,
        count = quoted("paintingsForGenre"),
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn genre_counts_ascend() {
        let q = paintings_per_genre();
        assert!(q.sql.contains(r#"GROUP BY g."genreName""#));
        assert!(q.sql.ends_with(r#"ORDER BY "paintingsForGenre" ASC"#));
        assert!(q.params.is_empty());
    }

    #[test]
    fn artist_counts_concatenate_names_and_descend() {
        let q = paintings_per_artist();
        assert!(q.sql.contains(r#"(a."firstName" || ' ' || a."lastName") AS "artistName""#));
        assert!(q.sql.ends_with(r#"ORDER BY "paintingCount" DESC"#));
    }

    #[test]
    fn top_genres_binds_threshold() {
        let q = top_genres(20);
        assert!(q.sql.contains(r#"HAVING COUNT(p."paintingId") >= $1"#));
        assert!(q.sql.ends_with(r#"ORDER BY "paintingsForGenre" DESC"#));
        assert_eq!(q.params, vec![json!(20)]);
    }
}
