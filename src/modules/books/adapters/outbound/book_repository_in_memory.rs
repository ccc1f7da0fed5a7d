// In memory bookshelf.
//
// Purpose
// - Hold every book for the lifetime of the process. Nothing is persisted.
//
// Responsibilities
// - Keep books in insertion order, unique by id.
// - Answer lookups and filtered listings with linear scans.

use crate::modules::books::adapters::outbound::book_repository::BookRepository;
use crate::modules::books::core::book::{Book, BookSummary};
use crate::modules::books::core::filter::BookFilter;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
    is_offline: bool,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Book repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn insert(&self, book: Book) -> anyhow::Result<()> {
        self.ensure_online()?;

        let mut guard = self.books.write().await;
        if guard.iter().any(|stored| stored.id == book.id) {
            anyhow::bail!("duplicate book id {}", book.id);
        }
        guard.push(book);
        Ok(())
    }

    async fn list(&self, filter: &BookFilter) -> anyhow::Result<Vec<BookSummary>> {
        self.ensure_online()?;

        Ok(self
            .books
            .read()
            .await
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookSummary::from)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Book>> {
        self.ensure_online()?;

        Ok(self
            .books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned())
    }

    async fn replace(&self, book: Book) -> anyhow::Result<bool> {
        self.ensure_online()?;

        let mut guard = self.books.write().await;
        match guard.iter_mut().find(|stored| stored.id == book.id) {
            Some(stored) => {
                *stored = book;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;

        let mut guard = self.books.write().await;
        match guard.iter().position(|book| book.id == id) {
            Some(index) => {
                guard.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
