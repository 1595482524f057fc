use std::sync::Arc;

use log::info;

use crate::fetch::{DiagnosticSink, Fetch};
use crate::models::PokemonRecord;

/// Walks the paginated listing and the per-Pokémon detail endpoints.
///
/// Failure policy lives here, not in the fetcher: a listing-page failure
/// stops pagination and keeps what was already collected, while a detail
/// failure skips that single name.
pub struct Collector<F> {
    fetcher: F,
    listing_url: String,
    detail_base_url: String,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl<F: Fetch> Collector<F> {
    pub fn new(
        fetcher: F,
        listing_url: &str,
        detail_base_url: &str,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Collector {
            fetcher,
            listing_url: listing_url.to_string(),
            detail_base_url: detail_base_url.trim_end_matches('/').to_string(),
            diagnostics,
        }
    }

    /// Follows `next` links from the listing root, accumulating every entry's
    /// name in response order. An entry without a `name` key contributes a
    /// `None` placeholder so the length still matches the listing count.
    ///
    /// A page that cycles back to itself would loop forever; the upstream API
    /// does not do that and no guard is attempted here.
    pub async fn collect_names(&self) -> Vec<Option<String>> {
        let mut names: Vec<Option<String>> = Vec::new();
        let mut next_page = Some(self.listing_url.clone());

        while let Some(url) = next_page {
            let page = match self.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    self.diagnostics
                        .record(&url, &format!("stopping listing traversal: {}", e));
                    return names;
                }
            };

            let results = page.get("results").and_then(|r| r.as_array());
            for entry in results.into_iter().flatten() {
                names.push(
                    entry
                        .get("name")
                        .and_then(|n| n.as_str())
                        .map(|s| s.to_string()),
                );
            }

            next_page = page
                .get("next")
                .and_then(|n| n.as_str())
                .map(|s| s.to_string());
        }

        info!("collected {} pokemon names", names.len());
        names
    }

    /// Fetches the detail record for each collected name, in order. One
    /// failing name is skipped; the rest of the sequence is still processed.
    pub async fn fetch_details(&self, names: &[Option<String>]) -> Vec<PokemonRecord> {
        let mut records = Vec::new();

        for name in names {
            let Some(name) = name else {
                self.diagnostics
                    .record(&self.detail_base_url, "listing entry had no name, skipping");
                continue;
            };

            let url = format!("{}/{}", self.detail_base_url, name);
            match self.fetcher.fetch(&url).await {
                Ok(detail) => records.push(PokemonRecord::from_detail(name, &detail)),
                Err(e) => {
                    self.diagnostics
                        .record(&url, &format!("skipping {}: {}", name, e));
                }
            }
        }

        records
    }
}
