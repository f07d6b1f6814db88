//! Books service
//!
//! Business rules for the book lifecycle: payload validation, id
//! generation, the `finished` derivation and write timestamps.

use chrono::{SecondsFormat, Utc};
use rand::{distributions::Alphanumeric, Rng};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BookSummary},
    repository::Repository,
};

/// Length of generated book identifiers
const ID_LENGTH: usize = 16;

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the collection, returning its generated id
    pub fn create(&self, payload: &BookPayload) -> AppResult<String> {
        validate(payload)?;

        let id = generate_id();
        let now = timestamp();
        let book = Book {
            id: id.clone(),
            name: payload.name.clone(),
            year: payload.year,
            author: payload.author.clone(),
            summary: payload.summary.clone(),
            publisher: payload.publisher.clone(),
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.page_count == payload.read_page,
            reading: payload.reading,
            inserted_at: now.clone(),
            updated_at: now,
        };

        self.repository.books.insert(book)?;
        tracing::debug!(book_id = %id, "book added");
        Ok(id)
    }

    /// All records, in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    /// The projected `{id, name, publisher}` view of every record
    pub fn list_summaries(&self) -> Vec<BookSummary> {
        self.repository
            .books
            .list()
            .iter()
            .map(Book::summary)
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .find(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Replace every field except `id` and `inserted_at`
    ///
    /// Payload validation runs before the existence check, so a bad
    /// payload for an unknown id reports the validation failure, not
    /// NotFound. `finished` is left untouched even when
    /// `page_count`/`read_page` change.
    pub fn update(&self, id: &str, payload: &BookPayload) -> AppResult<()> {
        validate(payload)?;

        let now = timestamp();
        self.repository.books.modify(id, |book| {
            book.name = payload.name.clone();
            book.year = payload.year;
            book.author = payload.author.clone();
            book.summary = payload.summary.clone();
            book.publisher = payload.publisher.clone();
            book.page_count = payload.page_count;
            book.read_page = payload.read_page;
            book.reading = payload.reading;
            book.updated_at = now;
        })?;
        tracing::debug!(book_id = %id, "book updated");
        Ok(())
    }
}

/// Payload validation shared by create and update, short-circuiting on
/// the first failure: name presence first, then the page invariant
fn validate(payload: &BookPayload) -> AppResult<()> {
    if payload.name.is_empty() {
        return Err(AppError::MissingName);
    }
    if payload.read_page > payload.page_count {
        return Err(AppError::ReadPageExceedsPageCount);
    }
    Ok(())
}

/// Random 16-character alphanumeric identifier
fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Current time as an ISO-8601 string with millisecond precision,
/// the same shape JavaScript's `Date.toISOString()` produces
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
