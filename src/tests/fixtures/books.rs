use crate::modules::books::core::book::Book;
use crate::tests::fixtures::payloads::book_payload::BookPayloadBuilder;

/// A canonical stored book, identical for the same id.
pub fn make_book(id: &str) -> Book {
    Book::create(
        id.to_string(),
        "Buku A".to_string(),
        BookPayloadBuilder::new().build(),
        "2026-10-19".to_string(),
    )
}
