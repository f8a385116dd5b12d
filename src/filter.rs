//! Keyword relevance filtering and URL deduplication.
//!
//! Both operations are pure, order-preserving functions over the article
//! list; all observability is via count logs.

use crate::models::Article;
use itertools::Itertools;
use tracing::info;

/// Keywords a headline must contain (case-insensitively) to be considered
/// finance-relevant. Override-able per run.
pub const DEFAULT_KEYWORDS: [&str; 22] = [
    "stock",
    "market",
    "invest",
    "trading",
    "nasdaq",
    "dow",
    "s&p",
    "finance",
    "Trump",
    "Gold",
    "Crude Oil",
    "Business",
    "BSE",
    "NSE",
    "Nifty",
    "Sensex",
    "economy",
    "fed",
    "interest rate",
    "inflation",
    "earnings",
    "dividend",
];

/// The default keyword set as owned strings, for CLI defaulting.
pub fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Retain articles whose lowercased title contains at least one lowercased
/// keyword as a substring. Order-preserving and idempotent.
pub fn filter_by_keywords(articles: Vec<Article>, keywords: &[String]) -> Vec<Article> {
    let total = articles.len();
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let filtered: Vec<Article> = articles
        .into_iter()
        .filter(|article| {
            let title = article.title.to_lowercase();
            keywords.iter().any(|keyword| title.contains(keyword))
        })
        .collect();

    info!(
        before = total,
        after = filtered.len(),
        "Filtered articles by keywords"
    );
    filtered
}

/// Remove articles whose link has been seen before, keeping the first
/// occurrence and preserving input order.
pub fn dedupe_articles(articles: Vec<Article>) -> Vec<Article> {
    let total = articles.len();
    let unique: Vec<Article> = articles
        .into_iter()
        .unique_by(|article| article.link.clone())
        .collect();

    info!(before = total, after = unique.len(), "Deduplicated articles");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, link: &str) -> Article {
        Article {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_filter_keeps_matching_titles() {
        let articles = vec![
            article("Stock Market Hits New High", "https://example.com/1"),
            article("Local Bakery Opens", "https://example.com/2"),
            article("Inflation Fears Rise", "https://example.com/3"),
        ];
        let keywords = vec!["stock".to_string(), "inflation".to_string()];

        let filtered = filter_by_keywords(articles, &keywords);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Stock Market Hits New High");
        assert_eq!(filtered[1].title, "Inflation Fears Rise");
    }

    #[test]
    fn test_filter_is_case_insensitive_both_ways() {
        let articles = vec![article("NASDAQ slides in early TRADING", "https://example.com/1")];
        let keywords = vec!["Nasdaq".to_string()];

        assert_eq!(filter_by_keywords(articles, &keywords).len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let articles = vec![
            article("Dow Jones Climbs", "https://example.com/1"),
            article("Weather Warning Issued", "https://example.com/2"),
            article("Earnings Season Begins", "https://example.com/3"),
        ];
        let keywords = default_keywords();

        let once = filter_by_keywords(articles, &keywords);
        let twice = filter_by_keywords(once.clone(), &keywords);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_with_no_keywords_drops_everything() {
        let articles = vec![article("Anything", "https://example.com/1")];
        assert!(filter_by_keywords(articles, &[]).is_empty());
    }

    #[test]
    fn test_default_keywords_match_common_finance_titles() {
        let keywords = default_keywords();
        let articles = vec![
            article("Fed signals interest rate pause", "https://example.com/1"),
            article("S&P 500 ends flat", "https://example.com/2"),
        ];
        assert_eq!(filter_by_keywords(articles, &keywords).len(), 2);
    }

    #[test]
    fn test_dedupe_first_occurrence_wins() {
        let articles = vec![
            article("Article 1", "https://example.com/a"),
            article("Article 2", "https://example.com/b"),
            article("Article 1 (Updated)", "https://example.com/a"),
            article("Article 3", "https://example.com/c"),
            article("Article 2", "https://example.com/b"),
        ];

        let unique = dedupe_articles(articles);
        let links: Vec<&str> = unique.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(
            links,
            vec![
                "https://example.com/a",
                "https://example.com/b",
                "https://example.com/c"
            ]
        );
        // First occurrence keeps its original title.
        assert_eq!(unique[0].title, "Article 1");
    }

    #[test]
    fn test_dedupe_output_has_no_shared_links() {
        let articles = vec![
            article("A", "https://example.com/x"),
            article("B", "https://example.com/x"),
            article("C", "https://example.com/y"),
        ];

        let unique = dedupe_articles(articles.clone());
        assert!(unique.len() <= articles.len());
        for (i, a) in unique.iter().enumerate() {
            for b in &unique[i + 1..] {
                assert_ne!(a.link, b.link);
            }
        }
    }

    #[test]
    fn test_dedupe_empty_input() {
        assert!(dedupe_articles(Vec::new()).is_empty());
    }
}
