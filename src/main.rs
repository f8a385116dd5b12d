//! # FinStream
//!
//! A financial-news aggregation pipeline that discovers finance news sites,
//! extracts headline/link pairs from their pages, filters them by keyword
//! relevance, deduplicates them by URL, and prepares draft posts for a
//! publishing backend.
//!
//! ## Usage
//!
//! ```sh
//! finstream
//! finstream --max-sites 2 -k inflation -k earnings
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Discovery**: Find candidate finance news domains via a news search,
//!    falling back to a static list of well-known sources
//! 2. **Fetching**: Download each site's front page and extract headline
//!    candidates heuristically
//! 3. **Filtering**: Keep headlines containing finance keywords, then drop
//!    duplicate URLs
//! 4. **Publishing**: Hand each unique article to the configured publisher
//!    (draft-logging stub by default, authenticated REST with `--publish`)
//!
//! Every stage degrades gracefully; a run always terminates normally and
//! prints a one-line summary.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod discovery;
mod fetch;
mod filter;
mod models;
mod pipeline;
mod publish;
mod scrapers;
mod utils;

use cli::Cli;
use fetch::HttpFetcher;
use publish::{DraftPublisher, RestPublisher};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("finstream starting up");

    let args = Cli::parse();
    debug!(?args.query, ?args.max_sites, ?args.discovery_policy, "Parsed CLI arguments");

    let fetcher = HttpFetcher::new()?;
    let options = args.run_options();

    // Publisher selection happens here, once; the pipeline itself is generic
    // over the publisher capability. Credential presence is enforced by clap
    // when --publish is set.
    let summary = match (args.publish, args.site_url, args.site_user, args.site_app_password) {
        (true, Some(endpoint), Some(user), Some(app_password)) => {
            info!(%endpoint, "Submitting drafts to REST endpoint");
            let publisher = RestPublisher::new(endpoint, user, app_password)?;
            pipeline::run(&fetcher, &publisher, &options).await
        }
        _ => {
            info!("Preparing drafts without submission");
            let publisher = DraftPublisher::new();
            pipeline::run(&fetcher, &publisher, &options).await
        }
    };

    if summary.unique == 0 {
        println!("\nSummary: No articles found matching the criteria.");
    } else {
        println!(
            "\nSummary: Found {} new articles, prepared {} posts.",
            summary.found, summary.posted
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
