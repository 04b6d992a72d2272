use serde::Deserialize;

/// Form body submitted when saving a search result to the catalog.
///
/// Every field defaults to an empty string so a partially filled form still reaches the
/// handler instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateBookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub imageurl: String,
    #[serde(default)]
    pub description: String,
}

/// Form body submitted from the book detail page to overwrite a stored book.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateBookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub imageurl: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bookshelf: String,
}
