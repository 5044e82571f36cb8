use crate::error::SearchError;

/// Hard cap on rendered results, independent of what the backend returns.
pub const MAX_RESULTS: usize = 10;

/// Max summary length before truncation, in characters. The rendered field
/// is at most this plus the three-character ellipsis marker.
pub const SUMMARY_MAX_CHARS: usize = 150;

const DIVIDER_WIDTH: usize = 50;

/// One literature search hit, already normalized from the backend's
/// dataset schema. Position in the capped list is its only identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    pub title: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

impl Paper {
    fn render_block(&self) -> String {
        let title = self.title.as_deref().unwrap_or("No title available");
        let url = self.url.as_deref().unwrap_or("No URL available");

        let mut block = format!("Title: {}\nURL: {}", title, url);
        if let Some(ref summary) = self.summary {
            block.push_str(&format!("\nSummary: {}", truncate_summary(summary)));
        }
        block
    }
}

/// Truncate a summary to SUMMARY_MAX_CHARS characters plus an ellipsis
/// marker. Counted in chars, not bytes, so multi-byte text never splits.
fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        return summary.to_string();
    }
    let mut preview: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Tagged result of the fetch step. Callers branch on the variant;
/// `render()` reproduces the legacy sentinel texts for display and for
/// embedding into analysis prompts.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At most MAX_RESULTS papers, in the order the backend returned them.
    Report { query: String, papers: Vec<Paper> },
    /// The backend ran successfully but matched nothing.
    Empty { query: String },
    Failed(SearchError),
}

impl SearchOutcome {
    /// Build the success outcome, enforcing the result cap. An empty list
    /// collapses to `Empty`.
    pub fn report(query: impl Into<String>, mut papers: Vec<Paper>) -> Self {
        let query = query.into();
        if papers.is_empty() {
            return SearchOutcome::Empty { query };
        }
        papers.truncate(MAX_RESULTS);
        SearchOutcome::Report { query, papers }
    }

    pub fn is_report(&self) -> bool {
        matches!(self, SearchOutcome::Report { .. })
    }

    /// Render to the plain-text form fed to display and analysis.
    pub fn render(&self) -> String {
        match self {
            SearchOutcome::Report { query, papers } => {
                let divider = "-".repeat(DIVIDER_WIDTH);
                let blocks: Vec<String> = papers.iter().map(Paper::render_block).collect();
                format!(
                    "Found {} research papers on '{}':\n\n{}",
                    papers.len(),
                    query,
                    blocks.join(&format!("\n\n{}\n\n", divider))
                )
            }
            SearchOutcome::Empty { query } => {
                format!("No results found for '{}'", query)
            }
            SearchOutcome::Failed(err) => match err {
                // Backend/Results already carry their legacy prefix.
                SearchError::EmptyQuery | SearchError::InvalidResponse => {
                    format!("Error: {}", err)
                }
                SearchError::Backend(_) | SearchError::Results(_) => err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, summary: Option<&str>) -> Paper {
        Paper {
            title: Some(title.to_string()),
            url: Some(format!("https://pubmed.ncbi.nlm.nih.gov/{}", title)),
            summary: summary.map(|s| s.to_string()),
        }
    }

    #[test]
    fn short_summary_is_verbatim() {
        let summary = "a".repeat(150);
        assert_eq!(truncate_summary(&summary), summary);
    }

    #[test]
    fn long_summary_truncates_with_ellipsis() {
        let summary = "a".repeat(151);
        let rendered = truncate_summary(&summary);
        assert_eq!(rendered.chars().count(), 153);
        assert!(rendered.ends_with("..."));
        assert!(rendered.starts_with(&"a".repeat(150)));
    }

    #[test]
    fn truncation_never_splits_multibyte_chars() {
        let summary = "自".repeat(200);
        let rendered = truncate_summary(&summary);
        assert_eq!(rendered.chars().count(), 153);
        assert!(rendered.ends_with("..."));
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let block = Paper {
            title: None,
            url: None,
            summary: None,
        }
        .render_block();
        assert_eq!(block, "Title: No title available\nURL: No URL available");
    }

    #[test]
    fn summary_line_omitted_when_absent() {
        let block = paper("T1", None).render_block();
        assert!(!block.contains("Summary:"));

        let block = paper("T1", Some("short abstract")).render_block();
        assert!(block.contains("\nSummary: short abstract"));
    }

    #[test]
    fn report_caps_at_max_results_in_order() {
        let papers: Vec<Paper> = (0..15).map(|i| paper(&format!("T{}", i), None)).collect();
        let outcome = SearchOutcome::report("diabetes", papers);
        match &outcome {
            SearchOutcome::Report { papers, .. } => {
                assert_eq!(papers.len(), MAX_RESULTS);
                assert_eq!(papers[0].title.as_deref(), Some("T0"));
                assert_eq!(papers[9].title.as_deref(), Some("T9"));
            }
            other => panic!("expected report, got {:?}", other),
        }
        assert_eq!(outcome.render().matches("Title:").count(), MAX_RESULTS);
    }

    #[test]
    fn report_render_has_header_and_dividers() {
        let outcome =
            SearchOutcome::report("cancer", vec![paper("T1", None), paper("T2", None)]);
        let rendered = outcome.render();
        assert!(rendered.starts_with("Found 2 research papers on 'cancer':\n\n"));
        assert_eq!(rendered.matches(&"-".repeat(50)).count(), 1);
    }

    #[test]
    fn empty_paper_list_collapses_to_empty_outcome() {
        let outcome = SearchOutcome::report("obscure topic", vec![]);
        assert_eq!(
            outcome,
            SearchOutcome::Empty {
                query: "obscure topic".to_string()
            }
        );
        assert_eq!(outcome.render(), "No results found for 'obscure topic'");
    }

    #[test]
    fn rendering_is_idempotent() {
        let outcome = SearchOutcome::report(
            "diabetes",
            vec![paper("T1", Some(&"x".repeat(400))), paper("T2", None)],
        );
        assert_eq!(outcome.render(), outcome.render());
    }

    #[test]
    fn failure_sentinels_match_legacy_texts() {
        assert_eq!(
            SearchOutcome::Failed(SearchError::EmptyQuery).render(),
            "Error: No search keyword provided"
        );
        assert_eq!(
            SearchOutcome::Failed(SearchError::InvalidResponse).render(),
            "Error: Invalid response from Apify"
        );
        assert_eq!(
            SearchOutcome::Failed(SearchError::Backend("connection reset".to_string())).render(),
            "Apify error: connection reset"
        );
        assert_eq!(
            SearchOutcome::Failed(SearchError::Results("bad json".to_string())).render(),
            "Error processing results: bad json"
        );
    }
}
