use crate::modules::books::adapters::outbound::book_repository::BookRepository;
use crate::modules::books::core::book::{Book, BookPayload};
use crate::modules::books::core::validation::validate;
use crate::modules::books::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::clock::{Clock, to_date_string};
use crate::shared::infrastructure::id_generator::IdGenerator;
use std::sync::Arc;

pub struct AddBookHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> AddBookHandler<TRepository>
where
    TRepository: BookRepository + Send + Sync + 'static,
{
    pub fn new(
        repository: Arc<TRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            id_generator,
            clock,
        }
    }

    /// Stores a new book and returns its id.
    pub async fn handle(&self, payload: BookPayload) -> Result<String, ApplicationError> {
        let name = validate(&payload)?;

        let id = self.id_generator.generate();
        let inserted_at = to_date_string(self.clock.now());
        let book = Book::create(id.clone(), name, payload, inserted_at);
        self.repository.insert(book).await?;

        // The book must be readable back before the id is handed out.
        if self.repository.find_by_id(&id).await?.is_none() {
            return Err(ApplicationError::Unexpected(format!(
                "book {id} missing right after insert"
            )));
        }

        tracing::info!(book_id = %id, "book added");
        Ok(id)
    }
}
