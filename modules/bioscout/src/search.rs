use tracing::{info, warn};

use bioscout_common::{SearchError, SearchOutcome, MAX_RESULTS};

use crate::traits::LiteratureSource;

/// Fetch step: guard the query, run the backend search, and tag the result.
/// Never errors; every failure becomes a `SearchOutcome::Failed` the caller
/// can branch on.
pub async fn search_literature(source: &impl LiteratureSource, query: &str) -> SearchOutcome {
    let keyword = query.trim();
    if keyword.is_empty() {
        return SearchOutcome::Failed(SearchError::EmptyQuery);
    }

    info!(keyword, "Searching for biomedical literature");
    match source.search(keyword, MAX_RESULTS as u32).await {
        Ok(papers) => {
            info!(count = papers.len(), "Search returned");
            SearchOutcome::report(keyword, papers)
        }
        Err(err) => {
            warn!(error = %err, "Literature search failed");
            SearchOutcome::Failed(err)
        }
    }
}
