//! Search request models.

/// Form field carrying the search text followed by the mode flag.
pub const SEARCH_FIELD: &str = "search";

/// Which field of the remote catalog a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Title,
    Author,
    /// No field restriction; the text is sent as a free-text query.
    Any,
}

impl SearchMode {
    /// Parses the mode flag submitted with the search form.
    ///
    /// Only the exact values `title` and `author` restrict the query; anything else,
    /// including a missing flag, searches without a field restriction.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("title") => Self::Title,
            Some("author") => Self::Author,
            _ => Self::Any,
        }
    }
}

/// A search against the remote book API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub text: String,
    pub mode: SearchMode,
}

impl SearchParams {
    /// Builds search parameters from the submitted form pairs.
    ///
    /// The search form posts two fields named `search` (or `search[]`): the text first,
    /// the mode flag second. Other fields are ignored.
    ///
    /// # Arguments
    /// - `pairs` - Decoded `application/x-www-form-urlencoded` pairs in submission order
    ///
    /// # Returns
    /// - `Some(SearchParams)` - Text was present and not blank
    /// - `None` - No usable search text was submitted
    pub fn from_form(pairs: Vec<(String, String)>) -> Option<Self> {
        let mut values = pairs
            .into_iter()
            .filter(|(key, _)| key == SEARCH_FIELD || key == "search[]")
            .map(|(_, value)| value);

        let text = values.next()?.trim().to_string();
        if text.is_empty() {
            return None;
        }

        let mode = SearchMode::from_flag(values.next().as_deref());

        Some(Self { text, mode })
    }

    /// Query expression sent as the API's `q` parameter.
    pub fn query(&self) -> String {
        match self.mode {
            SearchMode::Title => format!("intitle:{}", self.text),
            SearchMode::Author => format!("inauthor:{}", self.text),
            SearchMode::Any => self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn parses_text_and_mode_in_order() {
        let params =
            SearchParams::from_form(pairs(&[("search", "Hobbit"), ("search", "title")])).unwrap();

        assert_eq!(params.text, "Hobbit");
        assert_eq!(params.mode, SearchMode::Title);
        assert_eq!(params.query(), "intitle:Hobbit");
    }

    #[test]
    fn author_mode_restricts_by_author() {
        let params =
            SearchParams::from_form(pairs(&[("search[]", "Tolkien"), ("search[]", "author")]))
                .unwrap();

        assert_eq!(params.mode, SearchMode::Author);
        assert_eq!(params.query(), "inauthor:Tolkien");
    }

    #[test]
    fn unknown_or_missing_mode_is_unrestricted() {
        let unknown =
            SearchParams::from_form(pairs(&[("search", "Dune"), ("search", "Title")])).unwrap();
        let missing = SearchParams::from_form(pairs(&[("search", "Dune")])).unwrap();

        assert_eq!(unknown.mode, SearchMode::Any);
        assert_eq!(missing.mode, SearchMode::Any);
        assert_eq!(missing.query(), "Dune");
    }

    #[test]
    fn ignores_unrelated_fields() {
        let params = SearchParams::from_form(pairs(&[
            ("_csrf", "token"),
            ("search", "Hobbit"),
            ("submit", "Go"),
            ("search", "title"),
        ]))
        .unwrap();

        assert_eq!(params.text, "Hobbit");
        assert_eq!(params.mode, SearchMode::Title);
    }

    #[test]
    fn rejects_missing_or_blank_text() {
        assert!(SearchParams::from_form(vec![]).is_none());
        assert!(SearchParams::from_form(pairs(&[("search", "   "), ("search", "title")])).is_none());
    }
}
