use anyhow::{anyhow, Result};

/// Application configuration loaded from environment variables (with
/// `.env` support). Secrets never appear in source or logs.
#[derive(Debug, Clone)]
pub struct Config {
    // Scraping
    pub apify_api_key: String,

    // AI / LLM
    pub openai_api_key: String,
    pub openai_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            apify_api_key: required_env("APIFY_API_KEY")?,
            openai_api_key: required_env("OPENAI_API_KEY")?,
            openai_model: std::env::var("OPENAI_MODEL_NAME")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
        };

        config.log_keys();
        Ok(config)
    }

    fn log_keys(&self) {
        fn preview(val: &str) -> String {
            let n = val.len().min(5);
            format!("{}...({} chars)", &val[..n], val.len())
        }

        tracing::info!("Config loaded:");
        tracing::info!("  APIFY_API_KEY: {}", preview(&self.apify_api_key));
        tracing::info!("  OPENAI_API_KEY: {}", preview(&self.openai_api_key));
        tracing::info!("  OPENAI_MODEL_NAME: {}", self.openai_model);
    }
}

fn required_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow!("{key} environment variable is required"))
}
