use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::books::core::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

/// Request body shared by the add and update operations.
///
/// Absent fields take their zero value. Only mistyped fields fail to decode.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

impl BookPayload {
    /// Decodes a request body. A missing name is reported before anything
    /// else about the body, whatever the other fields hold.
    pub fn from_json(body: Value) -> Result<Self, PayloadError> {
        let missing_name = match body.get("name") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => true,
            Some(Value::String(name)) => name.is_empty(),
            Some(_) => false,
        };
        if missing_name {
            return Err(ValidationError::MissingName.into());
        }
        Ok(serde_json::from_value(body)?)
    }
}

/// What `GET /books` hands out per book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

impl Book {
    /// `finished` is derived here and nowhere else.
    pub fn create(id: String, name: String, payload: BookPayload, inserted_at: String) -> Self {
        Self {
            id,
            name,
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.page_count == payload.read_page,
            reading: payload.reading,
            updated_at: inserted_at.clone(),
            inserted_at,
        }
    }

    /// Overwrites the mutable fields. `finished` and `inserted_at` are left as
    /// they were at creation.
    pub fn revise(&mut self, name: String, payload: BookPayload, updated_at: String) {
        self.name = name;
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading;
        self.updated_at = updated_at;
    }
}
