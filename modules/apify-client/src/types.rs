use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for the PubMed search actor. Field names match the actor's
/// input schema exactly (`maxitems` really is lowercase on the wire).
#[derive(Debug, Clone, Serialize)]
pub struct PubMedSearchInput {
    pub keyword: String,
    #[serde(rename = "maxitems")]
    pub max_items: u32,
    #[serde(rename = "sort_by")]
    pub sort_by: String,
}

impl PubMedSearchInput {
    /// "Best match" ranked search, the only sort mode the pipeline uses.
    pub fn best_match(keyword: &str, max_items: u32) -> Self {
        Self {
            keyword: keyword.to_string(),
            max_items,
            sort_by: "Best match".to_string(),
        }
    }
}

/// A single article from the PubMed actor's dataset. Every field is
/// optional; the actor omits keys it could not scrape.
#[derive(Debug, Clone, Deserialize)]
pub struct PubMedArticle {
    pub title: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub description: Option<String>,
}

impl PubMedArticle {
    /// Returns whichever summary field is populated, preferring the abstract.
    pub fn summary(&self) -> Option<&str> {
        self.abstract_text.as_deref().or(self.description.as_deref())
    }
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata. `default_dataset_id` is absent on some
/// malformed responses, which callers must treat as a hard error.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: Option<String>,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_input_uses_actor_wire_names() {
        let input = PubMedSearchInput::best_match("diabetes", 10);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["keyword"], "diabetes");
        assert_eq!(json["maxitems"], 10);
        assert_eq!(json["sort_by"], "Best match");
    }

    #[test]
    fn article_summary_prefers_abstract() {
        let article = PubMedArticle {
            title: None,
            url: None,
            abstract_text: Some("from abstract".to_string()),
            description: Some("from description".to_string()),
        };
        assert_eq!(article.summary(), Some("from abstract"));

        let article = PubMedArticle {
            title: None,
            url: None,
            abstract_text: None,
            description: Some("from description".to_string()),
        };
        assert_eq!(article.summary(), Some("from description"));
    }

    #[test]
    fn run_data_tolerates_missing_dataset_id() {
        let run: RunData = serde_json::from_value(serde_json::json!({
            "id": "run-1",
            "status": "SUCCEEDED"
        }))
        .unwrap();
        assert!(run.default_dataset_id.is_none());
    }
}
