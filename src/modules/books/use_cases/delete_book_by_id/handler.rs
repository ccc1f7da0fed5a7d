use crate::modules::books::adapters::outbound::book_repository::BookRepository;
use crate::modules::books::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct DeleteBookByIdHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteBookByIdHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, book_id: &str) -> Result<(), ApplicationError> {
        if !self.repository.remove(book_id).await? {
            return Err(ApplicationError::NotFound(book_id.to_string()));
        }
        tracing::info!(book_id, "book deleted");
        Ok(())
    }
}
