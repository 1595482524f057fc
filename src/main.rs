mod collect;
mod export;
mod fetch;
mod models;
#[cfg(test)]
mod test_support;
mod utils;

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use log::{info, LevelFilter};

use crate::collect::Collector;
use crate::fetch::{Fetch, HttpFetcher, LogSink};

const LISTING_URL: &str = "https://pokeapi.co/api/v2/pokemon";
const DETAIL_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";
const OUTPUT_PATH: &str = "data/pokemon_data.csv";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    utils::timed("pokemon export", run()).await
}

async fn run() -> Result<(), Box<dyn Error>> {
    let diagnostics = Arc::new(LogSink);
    let fetcher = HttpFetcher::new(diagnostics.clone())?;

    // The count is informational only; a failure here was already recorded
    // by the fetcher and does not stop the run.
    if let Ok(meta) = fetcher.fetch(LISTING_URL).await {
        info!(
            "upstream reports {:?} pokemon in total",
            meta.get("count").and_then(|c| c.as_u64())
        );
    }

    let collector = Collector::new(fetcher, LISTING_URL, DETAIL_BASE_URL, diagnostics);
    let names = collector.collect_names().await;
    let records = collector.fetch_details(&names).await;

    export::export(&records, Path::new(OUTPUT_PATH))?;
    info!("wrote {} records to {}", records.len(), OUTPUT_PATH);

    // Deliberate direct index: an empty result set violates the upstream
    // contract and should terminate the run loudly.
    info!("sample record: {:?}", records[0]);

    Ok(())
}
