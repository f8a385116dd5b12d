//! Finance news site discovery.
//!
//! Queries a news search engine for candidate sources, keeps the hosts an
//! explicit [`DomainPolicy`] accepts, and returns an ordered, deduplicated
//! list of at most `max_sites` domains. Discovery failure is non-fatal: any
//! fetch or parse problem yields an empty list, and callers substitute the
//! static [`FALLBACK_DOMAINS`] via [`discover_or_fallback`].

use crate::fetch::PageFetcher;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Known reliable finance news domains accepted by the allow-list policy.
static ALLOWED_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "finance.yahoo.com",
        "www.cnbc.com",
        "www.marketwatch.com",
        "www.bloomberg.com",
        "www.reuters.com",
        "www.investing.com",
        "www.ft.com",
        "www.wsj.com",
    ])
});

/// Well-known sources used when discovery yields nothing.
pub const FALLBACK_DOMAINS: [&str; 6] = [
    "finance.yahoo.com",
    "www.cnbc.com",
    "www.marketwatch.com",
    "www.bloomberg.com",
    "www.reuters.com",
    "www.investing.com",
];

/// Policy deciding whether a discovered host is accepted as a news source.
///
/// The two variants are deliberately distinct strategies; they are never
/// combined. `AllowList` trusts only a curated set of domains, `DenyList`
/// accepts anything that is not the search provider itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DomainPolicy {
    /// Accept only members of the curated finance-domain set.
    AllowList,
    /// Accept any host unless it contains `bing` or `microsoft`.
    DenyList,
}

impl DomainPolicy {
    /// Whether `host` is acceptable under this policy.
    pub fn accepts(self, host: &str) -> bool {
        match self {
            DomainPolicy::AllowList => ALLOWED_DOMAINS.contains(host),
            DomainPolicy::DenyList => {
                let host = host.to_lowercase();
                !host.contains("bing") && !host.contains("microsoft")
            }
        }
    }
}

/// Discover finance news sites via a news search query.
///
/// Issues a single search request, extracts every absolute link from the
/// result page, and keeps the hosts the policy accepts, first-seen order,
/// truncated to `max_sites`. Returns an empty list on any failure.
#[instrument(level = "info", skip(fetcher))]
pub async fn discover_sites<F: PageFetcher>(
    fetcher: &F,
    query: &str,
    max_sites: usize,
    policy: DomainPolicy,
) -> Vec<String> {
    let search_url = format!(
        "https://www.bing.com/news/search?q={}",
        urlencoding::encode(query)
    );

    let page = match fetcher.get(&search_url).await {
        Ok(page) => page,
        Err(e) => {
            error!(error = %e, %search_url, "Site discovery request failed");
            return Vec::new();
        }
    };
    if !page.is_success() {
        error!(status = page.status, %search_url, "Site discovery returned non-success status");
        return Vec::new();
    }

    let document = Html::parse_document(&page.body);
    let link_selector = Selector::parse(r#"a[href^="http"]"#).unwrap();

    let mut domains: Vec<String> = Vec::new();
    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(parsed) = Url::parse(href) else {
            debug!(%href, "Skipping unparseable discovery link");
            continue;
        };
        let Some(host) = parsed.host_str() else {
            continue;
        };
        if policy.accepts(host) && !domains.iter().any(|d| d == host) {
            domains.push(host.to_string());
        }
    }

    domains.truncate(max_sites);
    info!(count = domains.len(), ?domains, "Discovered finance news sites");
    domains
}

/// Discover sites, substituting the static fallback list when discovery
/// yields nothing.
#[instrument(level = "info", skip(fetcher))]
pub async fn discover_or_fallback<F: PageFetcher>(
    fetcher: &F,
    query: &str,
    max_sites: usize,
    policy: DomainPolicy,
) -> Vec<String> {
    let domains = discover_sites(fetcher, query, max_sites, policy).await;
    if domains.is_empty() {
        warn!("Site discovery yielded nothing; falling back to default sources");
        FALLBACK_DOMAINS.iter().map(|d| d.to_string()).collect()
    } else {
        domains
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::mock::MockFetcher;

    const SEARCH_URL: &str = "https://www.bing.com/news/search?q=finance%20news";

    fn search_page(anchors: &[&str]) -> String {
        let links: String = anchors
            .iter()
            .map(|href| format!("<a href=\"{href}\">result</a>"))
            .collect();
        format!("<html><body>{links}</body></html>")
    }

    #[test]
    fn test_allow_list_policy() {
        assert!(DomainPolicy::AllowList.accepts("www.cnbc.com"));
        assert!(DomainPolicy::AllowList.accepts("www.ft.com"));
        assert!(!DomainPolicy::AllowList.accepts("example.com"));
        assert!(!DomainPolicy::AllowList.accepts("cnbc.com"));
    }

    #[test]
    fn test_deny_list_policy() {
        assert!(DomainPolicy::DenyList.accepts("example.com"));
        assert!(DomainPolicy::DenyList.accepts("www.cnbc.com"));
        assert!(!DomainPolicy::DenyList.accepts("www.bing.com"));
        assert!(!DomainPolicy::DenyList.accepts("news.microsoft.com"));
        assert!(!DomainPolicy::DenyList.accepts("News.Bing.com"));
    }

    #[tokio::test]
    async fn test_discover_filters_and_dedupes() {
        let body = search_page(&[
            "https://www.cnbc.com/markets/story-1",
            "https://www.bing.com/news/more",
            "https://www.cnbc.com/markets/story-2",
            "https://www.reuters.com/business",
            "https://random-blog.example.com/post",
            "https://finance.yahoo.com/quote/SPY",
        ]);
        let fetcher = MockFetcher::new().with_page(SEARCH_URL, 200, &body);

        let domains =
            discover_sites(&fetcher, "finance news", 3, DomainPolicy::AllowList).await;
        assert_eq!(
            domains,
            vec!["www.cnbc.com", "www.reuters.com", "finance.yahoo.com"]
        );
    }

    #[tokio::test]
    async fn test_discover_truncates_to_max_sites() {
        let body = search_page(&[
            "https://www.cnbc.com/a",
            "https://www.reuters.com/b",
            "https://finance.yahoo.com/c",
            "https://www.bloomberg.com/d",
        ]);
        let fetcher = MockFetcher::new().with_page(SEARCH_URL, 200, &body);

        let domains =
            discover_sites(&fetcher, "finance news", 2, DomainPolicy::AllowList).await;
        assert_eq!(domains, vec!["www.cnbc.com", "www.reuters.com"]);
    }

    #[tokio::test]
    async fn test_discover_deny_list_keeps_unknown_hosts() {
        let body = search_page(&[
            "https://www.bing.com/news/more",
            "https://random-blog.example.com/post",
            "https://news.microsoft.com/item",
        ]);
        let fetcher = MockFetcher::new().with_page(SEARCH_URL, 200, &body);

        let domains = discover_sites(&fetcher, "finance news", 3, DomainPolicy::DenyList).await;
        assert_eq!(domains, vec!["random-blog.example.com"]);
    }

    #[tokio::test]
    async fn test_discover_failure_yields_empty() {
        let fetcher = MockFetcher::new().with_error(SEARCH_URL, "connection refused");
        let domains =
            discover_sites(&fetcher, "finance news", 3, DomainPolicy::AllowList).await;
        assert!(domains.is_empty());
    }

    #[tokio::test]
    async fn test_discover_non_success_status_yields_empty() {
        let fetcher = MockFetcher::new().with_page(SEARCH_URL, 503, "unavailable");
        let domains =
            discover_sites(&fetcher, "finance news", 3, DomainPolicy::AllowList).await;
        assert!(domains.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_substitutes_static_list() {
        let fetcher = MockFetcher::new().with_error(SEARCH_URL, "timed out");
        let domains =
            discover_or_fallback(&fetcher, "finance news", 3, DomainPolicy::AllowList).await;
        assert_eq!(domains, FALLBACK_DOMAINS.map(String::from).to_vec());
    }

    #[tokio::test]
    async fn test_fallback_not_used_when_discovery_succeeds() {
        let body = search_page(&["https://www.wsj.com/markets"]);
        let fetcher = MockFetcher::new().with_page(SEARCH_URL, 200, &body);

        let domains =
            discover_or_fallback(&fetcher, "finance news", 3, DomainPolicy::AllowList).await;
        assert_eq!(domains, vec!["www.wsj.com"]);
    }
}
