use crate::modules::books::core::book::Book;

/// Raw query string of `GET /books`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListBooksParams {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// Builds the params from query pairs in the order they appear. The first
/// `name` is kept. A repeated `reading` or `finished` no longer reads as a
/// single "0" or "1", so that flag falls through. Unknown keys are ignored.
impl FromIterator<(String, String)> for ListBooksParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let flag = match key.as_str() {
                "name" => {
                    params.name.get_or_insert(value);
                    continue;
                }
                "reading" => &mut params.reading,
                "finished" => &mut params.finished,
                _ => continue,
            };
            *flag = match flag.take() {
                None => Some(value),
                Some(_) => Some(String::new()),
            };
        }
        params
    }
}

/// At most one filter is applied per listing. `name` wins over `reading`,
/// which wins over `finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    NameContains(String),
    Reading(bool),
    Finished(bool),
}

fn flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("0") => Some(false),
        Some("1") => Some(true),
        _ => None,
    }
}

impl From<ListBooksParams> for BookFilter {
    fn from(params: ListBooksParams) -> Self {
        if let Some(name) = params.name {
            return Self::NameContains(name.to_lowercase());
        }
        if let Some(reading) = flag(params.reading.as_deref()) {
            return Self::Reading(reading);
        }
        if let Some(finished) = flag(params.finished.as_deref()) {
            return Self::Finished(finished);
        }
        Self::All
    }
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::NameContains(needle) => book.name.to_lowercase().contains(needle.as_str()),
            Self::Reading(reading) => book.reading == *reading,
            Self::Finished(finished) => book.finished == *finished,
        }
    }
}
