use crate::modules::books::adapters::outbound::book_repository::BookRepository;
use crate::modules::books::core::book::Book;
use crate::modules::books::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct GetBookByIdHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetBookByIdHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, book_id: &str) -> Result<Book, ApplicationError> {
        self.repository
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(book_id.to_string()))
    }
}
