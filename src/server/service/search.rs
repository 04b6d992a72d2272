use crate::server::{
    data::book_search::BookSearchApi,
    error::AppError,
    model::{book::NewBook, search::SearchParams},
};

pub struct BookSearchService<'a> {
    http_client: &'a reqwest::Client,
    search_url: &'a str,
}

impl<'a> BookSearchService<'a> {
    pub fn new(http_client: &'a reqwest::Client, search_url: &'a str) -> Self {
        Self {
            http_client,
            search_url,
        }
    }

    /// Searches the remote catalog and maps each result to an unsaved book
    pub async fn search(&self, params: SearchParams) -> Result<Vec<NewBook>, AppError> {
        let api = BookSearchApi::new(self.http_client, self.search_url);

        let volumes = api.search(&params).await?;

        Ok(volumes
            .into_iter()
            .map(|volume| NewBook::from_volume_info(volume.volume_info))
            .collect())
    }
}
