use crate::modules::books::adapters::outbound::book_repository::BookRepository;
use crate::modules::books::core::book::BookPayload;
use crate::modules::books::core::validation::validate;
use crate::modules::books::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::clock::{Clock, to_timestamp_string};
use std::sync::Arc;

pub struct UpdateBookByIdHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> UpdateBookByIdHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// The payload is validated before the book is looked up, so a bad
    /// payload is reported even for an unknown id. `finished` is not
    /// recomputed.
    pub async fn handle(&self, book_id: &str, payload: BookPayload) -> Result<(), ApplicationError> {
        let name = validate(&payload)?;

        let not_found = || ApplicationError::NotFound(book_id.to_string());
        let mut book = self
            .repository
            .find_by_id(book_id)
            .await?
            .ok_or_else(not_found)?;

        book.revise(name, payload, to_timestamp_string(self.clock.now()));
        if !self.repository.replace(book).await? {
            return Err(not_found());
        }

        tracing::info!(book_id, "book updated");
        Ok(())
    }
}
