// Trait abstraction for the literature backend.
//
// LiteratureSource hides the Apify run/poll/dataset three-step behind one call
// and classifies client errors into the fetch-layer taxonomy. Enables
// deterministic pipeline tests with MockSource: no network, no tokens.

use async_trait::async_trait;

use apify_client::{ApifyClient, ApifyError};
use bioscout_common::{Paper, SearchError};

#[async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Search for articles matching a keyword, best-match ranked.
    async fn search(&self, keyword: &str, limit: u32) -> Result<Vec<Paper>, SearchError>;
}

#[async_trait]
impl LiteratureSource for ApifyClient {
    async fn search(&self, keyword: &str, limit: u32) -> Result<Vec<Paper>, SearchError> {
        let articles = self
            .search_pubmed(keyword, limit)
            .await
            .map_err(classify)?;

        Ok(articles
            .into_iter()
            .map(|article| {
                let summary = article.summary().map(str::to_string);
                Paper {
                    title: article.title,
                    url: article.url,
                    summary,
                }
            })
            .collect())
    }
}

fn classify(err: ApifyError) -> SearchError {
    match err {
        ApifyError::MissingDataset(_) => SearchError::InvalidResponse,
        ApifyError::Parse(msg) => SearchError::Results(msg),
        other => SearchError::Backend(other.to_string()),
    }
}
