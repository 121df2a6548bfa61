//! Builds parameterized SELECT queries: one filter strategy per route, optional
//! one-level embeds, optional inner-join filters on a related table.

use crate::catalog::{Embed, EntityDef};
use serde_json::Value;

/// The three filter strategies. Each filtered route applies exactly one.
#[derive(Clone, Debug)]
pub enum Filter {
    /// Key equality. The value is already parsed and validated by the handler.
    Exact { column: &'static str, value: Value },
    /// Case-insensitive contains: `col ILIKE $n` with the needle bound as `%needle%`.
    Contains { column: &'static str, needle: String },
    /// Inclusive bounds on a numeric column.
    Between { column: &'static str, lo: i64, hi: i64 },
}

#[derive(Clone, Debug)]
pub struct OrderBy {
    pub column: &'static str,
    pub ascending: bool,
}

impl OrderBy {
    pub fn asc(column: &'static str) -> Self {
        OrderBy { column, ascending: true }
    }

    pub fn desc(column: &'static str) -> Self {
        OrderBy { column, ascending: false }
    }
}

/// Inner join against a related table so rows without a match drop out.
/// The filter applies to the joined alias, not the main table.
pub struct JoinFilter {
    pub related: &'static EntityDef,
    pub our_key: &'static str,
    pub their_key: &'static str,
    pub filter: Filter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    pub(crate) fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Plain statement with no bound values (health pings and the like).
    pub fn statement(sql: impl Into<String>) -> Self {
        QueryBuf {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub(crate) fn push_param(&mut self, v: Value) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Quote identifier for PostgreSQL (safe: names come from static descriptors).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// SELECT list: each column as-is, except `numeric` as col::text so generic row
/// decoding never depends on a decimal type mapping.
pub(crate) fn select_column_list(entity: &EntityDef) -> String {
    entity
        .columns
        .iter()
        .map(|c| {
            let q = quoted(c.name);
            if c.pg_type == "numeric" {
                format!("{}::text", q)
            } else {
                q
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn aliased_column_list(entity: &EntityDef, alias: &str) -> Vec<String> {
    entity
        .columns
        .iter()
        .map(|c| {
            let q = quoted(c.name);
            let expr = if c.pg_type == "numeric" {
                format!("{}.{}::text", alias, q)
            } else {
                format!("{}.{}", alias, q)
            };
            format!("{} AS {}", expr, q)
        })
        .collect()
}

/// Placeholder with a cast to the column's Postgres type, so bound i64/text values
/// compare against int4/text columns without inference surprises.
fn placeholder(entity: &EntityDef, column: &str, n: usize) -> String {
    match entity.column(column) {
        Some(c) => format!("${}::{}", n, c.pg_type),
        None => format!("${}", n),
    }
}

fn render_filter(q: &mut QueryBuf, alias: Option<&str>, entity: &EntityDef, filter: &Filter) -> String {
    let prefix = alias.map(|a| format!("{}.", a)).unwrap_or_default();
    match filter {
        Filter::Exact { column, value } => {
            let n = q.push_param(value.clone());
            format!("{}{} = {}", prefix, quoted(column), placeholder(entity, column, n))
        }
        Filter::Contains { column, needle } => {
            let n = q.push_param(Value::String(format!("%{}%", needle)));
            format!("{}{} ILIKE ${}", prefix, quoted(column), n)
        }
        Filter::Between { column, lo, hi } => {
            let a = q.push_param(Value::from(*lo));
            let b = q.push_param(Value::from(*hi));
            format!(
                "{pfx}{col} >= {pa} AND {pfx}{col} <= {pb}",
                pfx = prefix,
                col = quoted(column),
                pa = placeholder(entity, column, a),
                pb = placeholder(entity, column, b),
            )
        }
    }
}

fn order_clause(entity: &EntityDef, alias: Option<&str>, order: &[OrderBy]) -> String {
    let prefix = alias.map(|a| format!("{}.", a)).unwrap_or_default();
    let parts: Vec<String> = if order.is_empty() {
        // Stable default when the route specifies no ordering.
        vec![format!("{}{} ASC", prefix, quoted(entity.pk))]
    } else {
        order
            .iter()
            .map(|o| {
                format!(
                    "{}{} {}",
                    prefix,
                    quoted(o.column),
                    if o.ascending { "ASC" } else { "DESC" }
                )
            })
            .collect()
    };
    format!(" ORDER BY {}", parts.join(", "))
}

/// Scalar subquery embedding one related row as JSON under the embed's name.
pub(crate) fn embed_subquery(embed: &Embed, main_alias: &str) -> String {
    let rel_table = quoted(embed.entity.table);
    let rel_cols = select_column_list(embed.entity);
    format!(
        "(SELECT row_to_json(sub) FROM (SELECT {} FROM {} WHERE {} = {}.{}) sub) AS {}",
        rel_cols,
        rel_table,
        quoted(embed.their_key),
        main_alias,
        quoted(embed.our_key),
        quoted(embed.name)
    )
}

/// SELECT over a flat entity with optional filters. Order defaults to primary key.
pub fn select(entity: &EntityDef, filters: &[Filter], order: &[OrderBy]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = quoted(entity.table);
    let cols = select_column_list(entity);

    let where_parts: Vec<String> = filters
        .iter()
        .map(|f| render_filter(&mut q, None, entity, f))
        .collect();
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };

    q.sql = format!(
        "SELECT {} FROM {}{}{}",
        cols,
        table,
        where_clause,
        order_clause(entity, None, order)
    );
    q
}

/// SELECT with one-level embeds in a single query: main table aliased as `main`,
/// each embed a `row_to_json` scalar subquery. `join_filters` add inner joins so
/// a filter on a related table excludes main rows without a match.
pub fn select_with_embeds(
    entity: &EntityDef,
    embeds: &[&Embed],
    filters: &[Filter],
    join_filters: &[JoinFilter],
    order: &[OrderBy],
) -> QueryBuf {
    const MAIN: &str = "main";
    let mut q = QueryBuf::new();
    let table = quoted(entity.table);

    let mut select_parts = aliased_column_list(entity, MAIN);
    for emb in embeds {
        select_parts.push(embed_subquery(emb, MAIN));
    }

    let mut join_clauses = String::new();
    let mut where_parts = Vec::new();
    for f in filters {
        where_parts.push(render_filter(&mut q, Some(MAIN), entity, f));
    }
    for (i, jf) in join_filters.iter().enumerate() {
        let alias = format!("r{}", i);
        join_clauses.push_str(&format!(
            " JOIN {} {} ON {}.{} = {}.{}",
            quoted(jf.related.table),
            alias,
            alias,
            quoted(jf.their_key),
            MAIN,
            quoted(jf.our_key)
        ));
        where_parts.push(render_filter(&mut q, Some(&alias), jf.related, &jf.filter));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };

    q.sql = format!(
        "SELECT {} FROM {} {}{}{}{}",
        select_parts.join(", "),
        table,
        MAIN,
        join_clauses,
        where_clause,
        order_clause(entity, Some(MAIN), order)
    );
    q
}
