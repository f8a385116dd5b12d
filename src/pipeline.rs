//! The discovery→fetch→filter→dedupe→publish orchestrator.
//!
//! Stages run strictly in order, one domain and one article at a time, and
//! every stage degrades gracefully: a run always completes, reporting zero
//! counts when everything upstream came back empty. The only accumulating
//! state is the article list owned here.

use crate::discovery::{self, DomainPolicy};
use crate::fetch::PageFetcher;
use crate::filter;
use crate::models::Article;
use crate::publish::Publisher;
use crate::scrapers;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// News search query used for site discovery.
    pub query: String,
    /// Maximum number of discovered sites to fetch.
    pub max_sites: usize,
    /// Policy for accepting discovered hosts.
    pub policy: DomainPolicy,
    /// Keywords a headline must contain to be kept.
    pub keywords: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            query: "finance news".to_string(),
            max_sites: 3,
            policy: DomainPolicy::AllowList,
            keywords: filter::default_keywords(),
        }
    }
}

/// Aggregate counts from one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Articles collected from all sites before filtering.
    pub fetched: usize,
    /// Articles whose title matched a keyword.
    pub found: usize,
    /// Articles remaining after URL deduplication.
    pub unique: usize,
    /// Articles successfully handed to the publisher.
    pub posted: usize,
}

/// Run the full pipeline once.
///
/// Domains are fetched sequentially in discovery order and their articles
/// concatenated in that order, so the final list is deterministic. Unique
/// articles are published one at a time; a per-article publish failure is
/// logged and the batch continues.
#[instrument(level = "info", skip_all, fields(query = %options.query))]
pub async fn run<F: PageFetcher, P: Publisher>(
    fetcher: &F,
    publisher: &P,
    options: &RunOptions,
) -> RunSummary {
    info!("Starting financial news run");

    let domains = discovery::discover_or_fallback(
        fetcher,
        &options.query,
        options.max_sites,
        options.policy,
    )
    .await;

    let all_articles: Vec<Article> = stream::iter(&domains)
        .then(|domain| async move {
            let url = format!("https://{domain}");
            scrapers::fetch_articles(fetcher, &url).await
        })
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .flatten()
        .collect();
    info!(
        count = all_articles.len(),
        sites = domains.len(),
        "Collected articles from all sites"
    );

    let fetched = all_articles.len();
    let matched = filter::filter_by_keywords(all_articles, &options.keywords);
    let found = matched.len();
    let unique_articles = filter::dedupe_articles(matched);
    let unique = unique_articles.len();

    let mut posted = 0usize;
    for article in &unique_articles {
        match publisher.publish(article).await {
            Ok(()) => posted += 1,
            Err(e) => {
                warn!(error = %e, link = %article.link, "Publish failed; continuing with next article");
            }
        }
    }

    info!(fetched, found, unique, posted, "Run complete");
    RunSummary {
        fetched,
        found,
        unique,
        posted,
    }
}
