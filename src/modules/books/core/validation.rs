use crate::modules::books::core::book::BookPayload;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    #[error("missing name")]
    MissingName,

    #[error("readPage exceeds pageCount")]
    ReadPageExceedsPageCount,
}

/// Checks a payload in the order the add and update operations report
/// failures: the name first, then the page counts. Returns the name on
/// success.
pub fn validate(payload: &BookPayload) -> Result<String, ValidationError> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(ValidationError::MissingName),
    };

    if payload.read_page > payload.page_count {
        return Err(ValidationError::ReadPageExceedsPageCount);
    }

    Ok(name)
}
