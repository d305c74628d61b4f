use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::bail;

use kb_client::config::Config;
use kb_client::lookup::{HttpLookup, SuggestionSource};
use kb_client::routes;
use kb_client::suggest::MIN_QUERY_LEN;

/// One-shot suggestion lookup against the knowledge-base server.
#[derive(Debug, Parser)]
#[command(name = "kb-search", version, about)]
struct Cli {
    /// Query to look up (at least 2 characters after trimming)
    query: String,

    /// Base address of the knowledge-base server (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum number of suggestions to print (overrides config)
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let base_url = cli.base_url.unwrap_or(config.server.base_url);
    let limit = cli.limit.unwrap_or(config.search.max_rows);

    let query = cli.query.trim().to_string();
    if query.chars().count() < MIN_QUERY_LEN {
        bail!("query must be at least {} characters", MIN_QUERY_LEN);
    }

    let client = HttpLookup::new(&base_url)?;
    let batch = client.suggestions(&query)?;

    if batch.is_empty() {
        println!("No results for {:?}", query);
        return Ok(());
    }

    for suggestion in batch.iter().take(limit) {
        println!("{} - {}", suggestion.title, suggestion.summary);
        println!("    {}", routes::article(&base_url, &suggestion.id));
    }

    if batch.len() > limit {
        println!(
            "View all {} results: {}",
            batch.len(),
            routes::search(&base_url, &query)
        );
    }

    Ok(())
}
