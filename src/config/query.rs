//! Configured image queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One configured request for images.
///
/// In the config file each entry carries a `type` tag plus the desired number
/// of images under `page_count`:
///
/// ```toml
/// [[querys]]
/// type = "search"
/// query = "mountains"
/// page_count = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuerySpec {
    /// Free-text photo search.
    Search {
        query: String,
        #[serde(rename = "page_count")]
        total: u32,
    },
    /// Curated collection, fetched by id.
    Collection {
        collection_id: String,
        #[serde(rename = "page_count")]
        total: u32,
    },
}

impl QuerySpec {
    /// Number of images the user asked for.
    pub fn desired_total(&self) -> u32 {
        match self {
            QuerySpec::Search { total, .. } | QuerySpec::Collection { total, .. } => *total,
        }
    }

    /// Short label for the query kind.
    pub fn kind(&self) -> &'static str {
        match self {
            QuerySpec::Search { .. } => "search",
            QuerySpec::Collection { .. } => "collection",
        }
    }
}

impl fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuerySpec::Search { query, total } => {
                write!(f, "search \"{}\" ({} images)", query, total)
            }
            QuerySpec::Collection {
                collection_id,
                total,
            } => write!(f, "collection {} ({} images)", collection_id, total),
        }
    }
}
