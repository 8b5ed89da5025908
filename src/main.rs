// Runs one matching pipeline from the command line.
//
// Usage: linkmatch <marketer_name> <url> <description> <comma,separated,fields>
//
// Storage and stopword locations come from LINKMATCH_STORAGE_DIR and
// LINKMATCH_STOPWORDS (defaults: ./marketers, ./stopwords.txt).

use anyhow::{Result, bail};
use linkmatch::{MatchConfig, MatchPipeline, MatchRequest};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [marketer_name, url, description, field] = args.as_slice() else {
        bail!("usage: linkmatch <marketer_name> <url> <description> <comma,separated,fields>");
    };

    let storage_dir =
        std::env::var("LINKMATCH_STORAGE_DIR").unwrap_or_else(|_| "./marketers".to_string());
    let stopwords =
        std::env::var("LINKMATCH_STOPWORDS").unwrap_or_else(|_| "stopwords.txt".to_string());

    let config = MatchConfig::builder()
        .storage_dir(storage_dir)
        .stopwords_path(stopwords)
        .build()?;

    let pipeline = MatchPipeline::new(config)?;
    let request = MatchRequest {
        marketer_name: marketer_name.clone(),
        url: url.clone(),
        description: Value::String(description.clone()),
        field: Value::String(field.clone()),
    };

    let outcome = pipeline.run(&request).await?;

    println!("Top matches:");
    for result in &outcome.matches {
        println!("  {} - Similarity Score: {}", result.corpus_name, result.score);
    }
    println!();
    for line in &outcome.broken_links {
        println!("{line}");
    }
    if !outcome.url_keywords.is_empty() {
        println!();
        for line in &outcome.url_keywords {
            println!("{line}");
        }
    }
    for line in &outcome.diagnostics {
        eprintln!("{line}");
    }

    Ok(())
}
