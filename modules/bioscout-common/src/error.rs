use thiserror::Error;

/// Fetch-layer failure taxonomy. Distinct from the zero-results condition,
/// which is a non-error outcome variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Empty or whitespace-only query; detected before any network call.
    #[error("No search keyword provided")]
    EmptyQuery,

    /// Run submission, polling, or transport failure at the backend.
    #[error("Apify error: {0}")]
    Backend(String),

    /// The backend finished a run but reported no dataset handle.
    #[error("Invalid response from Apify")]
    InvalidResponse,

    /// The dataset existed but its items could not be read or decoded.
    #[error("Error processing results: {0}")]
    Results(String),
}
