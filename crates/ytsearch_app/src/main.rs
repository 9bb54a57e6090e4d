//! Searches, prints the results as JSON, then follows continuation pages.

mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use search_logging::search_info;
use ytsearch_engine::{SearchClient, SearchFilter};

use logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "ytsearch_app")]
#[command(about = "Search videos, channels and playlists and print the results as JSON")]
struct Args {
    /// Search terms, joined with spaces.
    #[arg(required = true)]
    query: Vec<String>,

    /// Restrict results to video, channel, playlist or movie.
    #[arg(long = "type")]
    filter: Option<SearchFilter>,

    /// Number of pages to print, the first included.
    #[arg(long, default_value_t = 2)]
    pages: usize,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn query(&self) -> String {
        self.query.join(" ")
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(&LogDestination::from(args.log_file.clone()));

    let query = args.query();
    let client = SearchClient::default();
    let (results, mut state) = client
        .search(&query, args.filter)
        .await
        .with_context(|| format!("searching for {query:?}"))?;
    println!("{}", serde_json::to_string_pretty(&results)?);

    for page in 2..=args.pages {
        let results = client
            .next_page(&mut state)
            .await
            .with_context(|| format!("fetching page {page}"))?;
        search_info!("page {page}: {} results", results.len());
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(())
}
