// Test mock for the literature source boundary.
//
// MockSource returns one canned response (papers or an error), counts
// calls, and records the last keyword so tests can assert the
// empty-query guard never reaches the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use bioscout_common::{Paper, SearchError};

use crate::traits::LiteratureSource;

pub struct MockSource {
    response: Result<Vec<Paper>, SearchError>,
    calls: AtomicUsize,
    last_keyword: Mutex<Option<String>>,
}

impl MockSource {
    pub fn with_papers(papers: Vec<Paper>) -> Self {
        Self {
            response: Ok(papers),
            calls: AtomicUsize::new(0),
            last_keyword: Mutex::new(None),
        }
    }

    pub fn failing(err: SearchError) -> Self {
        Self {
            response: Err(err),
            calls: AtomicUsize::new(0),
            last_keyword: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_keyword(&self) -> Option<String> {
        self.last_keyword.lock().unwrap().clone()
    }
}

#[async_trait]
impl LiteratureSource for MockSource {
    async fn search(&self, keyword: &str, _limit: u32) -> Result<Vec<Paper>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_keyword.lock().unwrap() = Some(keyword.to_string());
        self.response.clone()
    }
}

/// Paper with a title and url but no summary.
pub fn paper(title: &str) -> Paper {
    Paper {
        title: Some(title.to_string()),
        url: Some(format!("https://pubmed.ncbi.nlm.nih.gov/{}/", title)),
        summary: None,
    }
}

/// Paper with an overlong summary, for truncation assertions.
pub fn paper_with_summary(title: &str, summary: &str) -> Paper {
    Paper {
        summary: Some(summary.to_string()),
        ..paper(title)
    }
}
