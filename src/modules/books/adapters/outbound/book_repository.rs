use crate::modules::books::core::book::{Book, BookSummary};
use crate::modules::books::core::filter::BookFilter;
use async_trait::async_trait;

/// The bookshelf itself: an ordered collection of books, unique by id.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Appends at the end of the collection.
    async fn insert(&self, book: Book) -> anyhow::Result<()>;

    /// Summaries of the matching books, in insertion order.
    async fn list(&self, filter: &BookFilter) -> anyhow::Result<Vec<BookSummary>>;

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Book>>;

    /// Swaps the stored book with the same id for `book`, keeping its
    /// position. Returns `false` when no such book is stored.
    async fn replace(&self, book: Book) -> anyhow::Result<bool>;

    /// Returns `false` when no such book is stored.
    async fn remove(&self, id: &str) -> anyhow::Result<bool>;
}
