use crate::{
    model::volume::{VolumeDto, VolumeSearchDto},
    server::{error::search::SearchError, model::search::SearchParams},
};

/// Upper bound on results requested per search.
pub const MAX_RESULTS: u8 = 10;

/// Client for the remote book search endpoint.
pub struct BookSearchApi<'a> {
    http_client: &'a reqwest::Client,
    search_url: &'a str,
}

impl<'a> BookSearchApi<'a> {
    /// Creates a client for the volumes endpoint at `search_url`.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `search_url` - Full URL of the volumes endpoint
    pub fn new(http_client: &'a reqwest::Client, search_url: &'a str) -> Self {
        Self {
            http_client,
            search_url,
        }
    }

    /// Searches the remote catalog and returns the raw result items.
    ///
    /// Sends `q` (restricted by title or author according to the search mode) and
    /// `maxResults` as URL-encoded query parameters. A response without `items` means
    /// nothing matched and yields an empty list.
    ///
    /// # Arguments
    /// - `params` - Search text and mode
    ///
    /// # Returns
    /// - `Ok(Vec<VolumeDto>)` - Up to [`MAX_RESULTS`] items as returned by the API
    /// - `Err(SearchError::Request)` - Request failed to send or body failed to decode
    /// - `Err(SearchError::Status)` - API answered with a non-success status
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<VolumeDto>, SearchError> {
        let query = params.query();

        tracing::debug!("Searching books with query '{}'", query);

        let response = self
            .http_client
            .get(self.search_url)
            .query(&[("maxResults", MAX_RESULTS.to_string()), ("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.json::<VolumeSearchDto>().await?;

        Ok(body.items)
    }
}
