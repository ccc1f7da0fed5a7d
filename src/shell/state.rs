use crate::modules::books::adapters::outbound::book_repository_in_memory::InMemoryBookRepository;
use crate::modules::books::use_cases::add_book::handler::AddBookHandler;
use crate::modules::books::use_cases::delete_book_by_id::handler::DeleteBookByIdHandler;
use crate::modules::books::use_cases::get_book_by_id::handler::GetBookByIdHandler;
use crate::modules::books::use_cases::list_books::handler::ListBooksHandler;
use crate::modules::books::use_cases::update_book_by_id::handler::UpdateBookByIdHandler;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::id_generator::IdGenerator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub add_book: Arc<AddBookHandler<InMemoryBookRepository>>,
    pub list_books: Arc<ListBooksHandler<InMemoryBookRepository>>,
    pub get_book_by_id: Arc<GetBookByIdHandler<InMemoryBookRepository>>,
    pub update_book_by_id: Arc<UpdateBookByIdHandler<InMemoryBookRepository>>,
    pub delete_book_by_id: Arc<DeleteBookByIdHandler<InMemoryBookRepository>>,
}

impl AppState {
    /// Every handler shares the same bookshelf.
    pub fn new(
        repository: Arc<InMemoryBookRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            add_book: Arc::new(AddBookHandler::new(
                repository.clone(),
                id_generator,
                clock.clone(),
            )),
            list_books: Arc::new(ListBooksHandler::new(repository.clone())),
            get_book_by_id: Arc::new(GetBookByIdHandler::new(repository.clone())),
            update_book_by_id: Arc::new(UpdateBookByIdHandler::new(repository.clone(), clock)),
            delete_book_by_id: Arc::new(DeleteBookByIdHandler::new(repository)),
        }
    }
}
