use crate::modules::books::adapters::outbound::book_repository::BookRepository;
use crate::modules::books::core::book::BookSummary;
use crate::modules::books::core::filter::{BookFilter, ListBooksParams};
use crate::modules::books::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct ListBooksHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListBooksHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, params: ListBooksParams) -> Result<Vec<BookSummary>, ApplicationError> {
        let filter = BookFilter::from(params);
        tracing::debug!(?filter, "listing books");
        Ok(self.repository.list(&filter).await?)
    }
}
