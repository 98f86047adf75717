//! In-memory book repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use cashbooks_core::books::{Book, BookRepositoryTrait, NewBook};
use cashbooks_core::errors::{Result, StoreError};

/// Book repository backed by a concurrent map keyed by book id.
#[derive(Default)]
pub struct BookRepository {
    books: DashMap<String, Book>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book> {
        let book = Book {
            id: new_book.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            owner_id: new_book.owner_id,
            name: new_book.name,
            created_at: Utc::now().naive_utc(),
        };
        self.books.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    async fn delete(&self, book_id: &str) -> Result<usize> {
        Ok(self.books.remove(book_id).map_or(0, |_| 1))
    }

    async fn get_by_id(&self, book_id: &str) -> Result<Book> {
        self.books
            .get(book_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(format!("Book {}", book_id)).into())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Book>> {
        let mut books: Vec<Book> = self
            .books
            .iter()
            .filter(|entry| entry.value().owner_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        books.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(books)
    }
}
