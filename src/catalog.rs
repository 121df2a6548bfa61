//! Static descriptors for the catalog tables.
//!
//! The schema is owned by the external store and this service never writes to it,
//! so entities are compile-time constants rather than a loaded model. Descriptors
//! carry exactly what query construction needs: table name, primary key, and the
//! column list with Postgres types for placeholder casts.

pub struct ColumnDef {
    pub name: &'static str,
    /// PostgreSQL type, used for `$n::type` casts and for selecting `numeric`
    /// columns as text.
    pub pg_type: &'static str,
}

pub struct EntityDef {
    pub table: &'static str,
    pub pk: &'static str,
    pub columns: &'static [ColumnDef],
}

impl EntityDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// One-level eager join: the related row is embedded as a JSON object under `name`.
/// Non-recursive; the embedded entity's own relations are not followed.
pub struct Embed {
    pub name: &'static str,
    pub entity: &'static EntityDef,
    /// Column on the embedding table.
    pub our_key: &'static str,
    /// Column on the related table.
    pub their_key: &'static str,
}

const fn col(name: &'static str, pg_type: &'static str) -> ColumnDef {
    ColumnDef { name, pg_type }
}

pub static ERAS: EntityDef = EntityDef {
    table: "Eras",
    pk: "eraId",
    columns: &[
        col("eraId", "int"),
        col("eraName", "text"),
        col("eraYears", "text"),
    ],
};

pub static GALLERIES: EntityDef = EntityDef {
    table: "Galleries",
    pk: "galleryId",
    columns: &[
        col("galleryId", "int"),
        col("galleryName", "text"),
        col("galleryNativeName", "text"),
        col("galleryCity", "text"),
        col("galleryAddress", "text"),
        col("galleryCountry", "text"),
        col("latitude", "numeric"),
        col("longitude", "numeric"),
        col("galleryWebSite", "text"),
        col("flickrPlaceId", "text"),
        col("googlePlaceId", "text"),
    ],
};

pub static ARTISTS: EntityDef = EntityDef {
    table: "Artists",
    pk: "artistId",
    columns: &[
        col("artistId", "int"),
        col("firstName", "text"),
        col("lastName", "text"),
        col("nationality", "text"),
        col("gender", "text"),
        col("yearOfBirth", "int"),
        col("yearOfDeath", "int"),
        col("details", "text"),
        col("artistLink", "text"),
    ],
};

pub static PAINTINGS: EntityDef = EntityDef {
    table: "Paintings",
    pk: "paintingId",
    columns: &[
        col("paintingId", "int"),
        col("artistId", "int"),
        col("galleryId", "int"),
        col("imageFileName", "text"),
        col("title", "text"),
        col("shapeId", "int"),
        col("museumLink", "text"),
        col("accessionNumber", "text"),
        col("copyrightText", "text"),
        col("description", "text"),
        col("excerpt", "text"),
        col("yearOfWork", "int"),
        col("width", "int"),
        col("height", "int"),
        col("medium", "text"),
        col("cost", "int"),
        col("MSRP", "int"),
        col("googleLink", "text"),
        col("googleDescription", "text"),
        col("wikiLink", "text"),
    ],
};

pub static GENRES: EntityDef = EntityDef {
    table: "Genres",
    pk: "genreId",
    columns: &[
        col("genreId", "int"),
        col("genreName", "text"),
        col("eraId", "int"),
        col("description", "text"),
        col("wikiLink", "text"),
    ],
};

/// Junction table resolving the many-to-many Painting <-> Genre relation.
/// Rows are unique per (paintingId, genreId) pair.
pub static PAINTING_GENRES: EntityDef = EntityDef {
    table: "PaintingGenres",
    pk: "paintingId",
    columns: &[col("paintingId", "int"), col("genreId", "int")],
};

pub static PAINTING_ARTIST: Embed = Embed {
    name: "artist",
    entity: &ARTISTS,
    our_key: "artistId",
    their_key: "artistId",
};

/// galleryId is nullable on Paintings; the embed is NULL for homeless paintings.
pub static PAINTING_GALLERY: Embed = Embed {
    name: "gallery",
    entity: &GALLERIES,
    our_key: "galleryId",
    their_key: "galleryId",
};

pub static GENRE_ERA: Embed = Embed {
    name: "era",
    entity: &ERAS,
    our_key: "eraId",
    their_key: "eraId",
};
