//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record
///
/// `id` and `inserted_at` are set once at creation and never change;
/// every other field is replaced wholesale by an update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// 16-character random alphanumeric identifier
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    /// Total number of pages
    pub page_count: i32,
    /// Pages read so far, never greater than `page_count`
    pub read_page: i32,
    /// Derived at creation: `page_count == read_page`
    pub finished: bool,
    /// Whether the book is currently being read (caller-supplied)
    pub reading: bool,
    /// ISO-8601 creation timestamp, immutable
    pub inserted_at: String,
    /// ISO-8601 timestamp of the last successful write
    pub updated_at: String,
}

/// Create/update book request
///
/// The same field set drives both operations; `finished` and the
/// timestamps are never caller-supplied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub page_count: i32,
    #[serde(default)]
    pub read_page: i32,
    #[serde(default)]
    pub reading: bool,
}

/// Projected book view exposed by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl Book {
    /// Reduce the record to its `{id, name, publisher}` projection
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}
