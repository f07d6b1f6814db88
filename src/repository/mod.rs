//! Repository layer owning the in-memory collections

pub mod books;

/// Main repository struct holding the process-local stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with an empty collection
    pub fn new() -> Self {
        Self::default()
    }
}
