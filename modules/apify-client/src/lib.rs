pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{PubMedArticle, PubMedSearchInput, RunData};

use std::time::Duration;

use serde::de::DeserializeOwned;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor ID for the PubMed keyword-search scraper.
const PUBMED_SEARCH_SCRAPER: &str = "I55A4lAMNxZwfySX4";

/// Per-request timeout. The `waitForFinish` long-poll hold is 60s, so the
/// client timeout must sit comfortably above it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Max `waitForFinish=60` polls before giving up on a run (~30 minutes).
const MAX_POLL_ATTEMPTS: u32 = 30;

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, token }
    }

    /// Start a PubMed search run. Returns immediately with run metadata.
    /// Retries once on a transport failure before giving up.
    pub async fn start_pubmed_search(&self, keyword: &str, limit: u32) -> Result<RunData> {
        let input = PubMedSearchInput::best_match(keyword, limit);
        let url = format!("{}/acts/{}/runs", BASE_URL, PUBMED_SEARCH_SCRAPER);

        let resp = match self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&input)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(error = %err, "Run submission failed, retrying once");
                tokio::time::sleep(Duration::from_secs(2)).await;
                self.client
                    .post(&url)
                    .bearer_auth(&self.token)
                    .json(&input)
                    .send()
                    .await?
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Poll until a run completes. Uses `waitForFinish=60` for efficient
    /// long-polling, bounded at MAX_POLL_ATTEMPTS so a stuck run errors out.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        for _ in 0..MAX_POLL_ATTEMPTS {
            let url = format!("{}/actor-runs/{}?waitForFinish=60", BASE_URL, run_id);
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(ApifyError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let api_resp: ApiResponse<RunData> = resp.json().await?;
            match api_resp.data.status.as_str() {
                "SUCCEEDED" => return Ok(api_resp.data),
                "FAILED" | "ABORTED" | "TIMED-OUT" => {
                    return Err(ApifyError::RunFailed(api_resp.data.status));
                }
                _ => {
                    tracing::debug!(run_id, status = %api_resp.data.status, "Run still in progress");
                    continue;
                }
            }
        }
        Err(ApifyError::PollBudgetExhausted(run_id.to_string()))
    }

    /// Fetch dataset items from a completed run.
    pub async fn get_dataset_items<T: DeserializeOwned>(&self, dataset_id: &str) -> Result<Vec<T>> {
        let url = format!("{}/datasets/{}/items?format=json", BASE_URL, dataset_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let items: Vec<T> = resp.json().await?;
        Ok(items)
    }

    /// Search PubMed end-to-end: start run, poll, fetch results.
    pub async fn search_pubmed(&self, keyword: &str, limit: u32) -> Result<Vec<PubMedArticle>> {
        tracing::info!(keyword, limit, "Starting PubMed search");

        let run = self.start_pubmed_search(keyword, limit).await?;
        tracing::info!(run_id = %run.id, "Apify run started, polling for completion");

        let completed = self.wait_for_run(&run.id).await?;
        let dataset_id = completed
            .default_dataset_id
            .as_deref()
            .ok_or_else(|| ApifyError::MissingDataset(completed.id.clone()))?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id,
            "Run completed, fetching results"
        );

        let articles: Vec<PubMedArticle> = self.get_dataset_items(dataset_id).await?;
        tracing::info!(count = articles.len(), "Fetched PubMed articles");

        Ok(articles)
    }
}
