use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

use ai_client::OpenAi;
use apify_client::ApifyClient;
use bioscout::{analyst, search};
use bioscout_common::Config;

/// Biomedical literature search + LLM analysis.
#[derive(Parser)]
#[command(name = "bioscout")]
struct Cli {
    /// Research topic. Skips the interactive prompt.
    #[arg(long)]
    topic: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bioscout=info".parse()?))
        .init();

    let cli = Cli::parse();

    println!("🏥 Biomedical Research Agent Starting...");
    println!("{}", "=".repeat(50));

    // Load config (fail fast on missing keys, before any prompt)
    let config = Config::from_env()?;

    let topic = match cli.topic {
        Some(topic) => topic.trim().to_string(),
        None => prompt_for_topic()?,
    };

    if topic.is_empty() {
        println!("No research topic provided. Exiting...");
        return Ok(());
    }

    println!("\n🔍 Searching for research on: {topic}");
    let apify = ApifyClient::new(config.apify_api_key);
    let outcome = search::search_literature(&apify, &topic).await;

    println!("\n{}", "=".repeat(50));
    println!("📊 RESEARCH RESULTS");
    println!("{}", "=".repeat(50));
    println!("{}", outcome.render());

    if !outcome.is_report() {
        // Nothing an analyst could work with; don't burn an LLM call on it.
        println!("\nSkipping analysis: no usable research data.");
        return Ok(());
    }

    let llm = OpenAi::new(config.openai_api_key, config.openai_model);

    println!("\n🧠 Starting analysis of {topic} research...");
    println!("{}", "=".repeat(60));

    let analysis = analyst::analyze(&llm, &topic, &outcome.render()).await?;

    println!("\n{}", "=".repeat(60));
    println!("🎯 RESEARCH ANALYSIS COMPLETED");
    println!("{}", "=".repeat(60));
    println!("{analysis}");

    Ok(())
}

fn prompt_for_topic() -> Result<String> {
    print!("What biomedical topic should I research? ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
