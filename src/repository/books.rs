//! Books repository
//!
//! The collection lives for the process lifetime only; a single mutex
//! guards every operation so concurrently dispatched handlers cannot
//! observe a half-applied write.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<Mutex<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Book>> {
        match self.books.lock() {
            Ok(guard) => guard,
            // Operations never leave the list half-written, so the data
            // behind a poisoned lock is still consistent
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Append a record and confirm the new id is visible in the collection
    pub fn insert(&self, book: Book) -> AppResult<()> {
        let id = book.id.clone();
        let mut books = self.lock();
        books.push(book);

        // Post-condition check: an appended record that cannot be found
        // again breaks every later read, so it surfaces as a 500
        if books.iter().any(|b| b.id == id) {
            Ok(())
        } else {
            Err(AppError::Internal(format!(
                "book {} not visible after insert",
                id
            )))
        }
    }

    /// All records, in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.lock().clone()
    }

    /// First (and by the uniqueness invariant, only) record with this id
    pub fn find(&self, id: &str) -> Option<Book> {
        self.lock().iter().find(|b| b.id == id).cloned()
    }

    /// Mutate the record with this id in place, under the lock
    pub fn modify<F>(&self, id: &str, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut Book),
    {
        let mut books = self.lock();
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                apply(book);
                Ok(())
            }
            None => Err(AppError::NotFound(id.to_string())),
        }
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(id: &str) -> Book {
        Book {
            id: id.to_string(),
            name: "The Rust Programming Language".to_string(),
            year: 2019,
            author: "Steve Klabnik".to_string(),
            summary: "An introduction to Rust".to_string(),
            publisher: "No Starch Press".to_string(),
            page_count: 560,
            read_page: 120,
            finished: false,
            reading: true,
            inserted_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn insert_makes_record_findable() {
        let repo = BooksRepository::new();
        repo.insert(sample_book("abc")).unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find("abc").unwrap().id, "abc");
    }

    #[test]
    fn list_preserves_insertion_order() {
        let repo = BooksRepository::new();
        repo.insert(sample_book("first")).unwrap();
        repo.insert(sample_book("second")).unwrap();
        repo.insert(sample_book("third")).unwrap();

        let ids: Vec<String> = repo.list().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn find_unknown_id_returns_none() {
        let repo = BooksRepository::new();
        repo.insert(sample_book("abc")).unwrap();
        assert!(repo.find("missing").is_none());
    }

    #[test]
    fn modify_unknown_id_is_not_found() {
        let repo = BooksRepository::new();
        let err = repo.modify("missing", |_| {}).unwrap_err();
        assert_eq!(err, AppError::NotFound("missing".to_string()));
    }

    #[test]
    fn modify_applies_in_place() {
        let repo = BooksRepository::new();
        repo.insert(sample_book("abc")).unwrap();
        repo.modify("abc", |book| book.read_page = 300).unwrap();
        assert_eq!(repo.find("abc").unwrap().read_page, 300);
    }
}
