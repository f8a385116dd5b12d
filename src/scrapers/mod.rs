//! Generic headline scraper for heterogeneous news pages.
//!
//! One heuristic works across all sources instead of per-site selectors:
//! headline candidates are `h1`/`h2`/`h3`/`a` elements whose class attribute
//! hints at a headline (see [`headline`]). For each candidate the link comes
//! from the element itself when it is an anchor, otherwise from its first
//! descendant anchor; relative links are resolved against the source URL's
//! origin.
//!
//! All failures are soft: a fetch or parse problem yields an empty result for
//! that URL and never halts the overall run.

pub mod headline;

use crate::fetch::PageFetcher;
use crate::models::Article;
use crate::utils::truncate_for_log;
use headline::{ClassHintMatcher, HeadlineMatcher};
use scraper::{Html, Selector};
use tracing::{debug, error, info, instrument, warn};
use url::{Position, Url};

/// Fetch a page and extract headline/link pairs from it.
///
/// Transport errors and non-success statuses are logged and produce an empty
/// result; they never propagate to the caller.
#[instrument(level = "info", skip(fetcher))]
pub async fn fetch_articles<F: PageFetcher>(fetcher: &F, url: &str) -> Vec<Article> {
    info!(%url, "Fetching articles");

    let page = match fetcher.get(url).await {
        Ok(page) => page,
        Err(e) => {
            error!(error = %e, %url, "Failed to fetch page");
            return Vec::new();
        }
    };
    if !page.is_success() {
        error!(status = page.status, %url, "Fetch returned non-success status");
        return Vec::new();
    }
    debug!(
        bytes = page.body.len(),
        body_preview = %truncate_for_log(&page.body, 200),
        "Fetched page body"
    );

    let articles = extract_articles(&page.body, url, &ClassHintMatcher::default());
    info!(count = articles.len(), %url, "Extracted articles");
    articles
}

/// Extract headline/link pairs from a parsed document.
///
/// Pure with respect to I/O; the HTML parser is lenient, so malformed markup
/// degrades to fewer candidates rather than an error. Candidates missing a
/// usable link or visible text are skipped.
pub fn extract_articles(
    html: &str,
    source_url: &str,
    matcher: &impl HeadlineMatcher,
) -> Vec<Article> {
    let base = match Url::parse(source_url) {
        Ok(base) => base,
        Err(e) => {
            warn!(error = %e, %source_url, "Source URL is not parseable; skipping document");
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let candidate_selector = Selector::parse("h1, h2, h3, a").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let mut articles = Vec::new();
    for element in document.select(&candidate_selector) {
        let tag = element.value().name();
        if !matcher.is_candidate(tag, element.value().attr("class")) {
            continue;
        }

        let href = if tag == "a" {
            element.value().attr("href")
        } else {
            element
                .select(&anchor_selector)
                .next()
                .and_then(|anchor| anchor.value().attr("href"))
        };
        let Some(href) = href else {
            continue;
        };

        let title = element.text().collect::<String>().trim().to_string();
        let link = resolve_link(href, &base);
        if title.is_empty() || link.is_empty() {
            continue;
        }

        articles.push(Article { title, link });
    }

    articles
}

/// Resolve an extracted href against the source page's origin.
///
/// Host-relative links (`/path`) are prefixed with the origin, including any
/// port. Protocol-relative links (`//host/path`) inherit the source scheme.
/// Every other form passes through unchanged.
fn resolve_link(href: &str, base: &Url) -> String {
    if let Some(rest) = href.strip_prefix("//") {
        format!("{}://{}", base.scheme(), rest)
    } else if href.starts_with('/') {
        format!("{}{}", &base[..Position::BeforePath], href)
    } else {
        href.to_string()
    }
}
