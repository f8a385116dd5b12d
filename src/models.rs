//! Data models for scraped headlines and the draft post payload.
//!
//! This module defines the two data shapes that cross component boundaries:
//! - [`Article`]: a headline/link pair extracted from a news page
//! - [`DraftPayload`]: the structured draft post a publisher submits downstream
//!
//! Articles are immutable once created; identity for deduplication purposes is
//! the `link` alone.

use serde::{Deserialize, Serialize};

/// A headline/link pair extracted from a news page.
///
/// The `title` is trimmed visible text and the `link` is an absolute URL.
/// Two articles with the same link are considered the same article regardless
/// of title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The headline text, trimmed of surrounding whitespace.
    pub title: String,
    /// The absolute URL of the article.
    pub link: String,
}

/// The draft post payload submitted to a publishing backend.
///
/// Mirrors the shape a content-management REST API expects. The payload is
/// ephemeral; it exists only for the duration of one publish call and is never
/// persisted by this crate.
#[derive(Debug, Deserialize, Serialize)]
pub struct DraftPayload {
    /// The post title, taken from the article headline.
    pub title: String,
    /// HTML body of the post.
    pub content: String,
    /// Publication status; always `"draft"`.
    pub status: String,
    /// Post format; always `"standard"`.
    pub format: String,
    /// Preparation timestamp in `YYYY-MM-DD HH:MM:SS` format.
    pub date: String,
    /// Post metadata carrying the article provenance.
    pub meta: PayloadMeta,
}

/// Metadata attached to a draft post.
#[derive(Debug, Deserialize, Serialize)]
pub struct PayloadMeta {
    /// The URL of the original article the post was prepared from.
    pub original_source: String,
}

impl DraftPayload {
    /// Build a draft payload for an article.
    ///
    /// When no `content` is supplied, a simple HTML body linking the original
    /// article is generated.
    pub fn from_article(article: &Article, content: Option<&str>, date: String) -> Self {
        let content = match content {
            Some(c) => c.to_string(),
            None => default_content(article),
        };

        Self {
            title: article.title.clone(),
            content,
            status: "draft".to_string(),
            format: "standard".to_string(),
            date,
            meta: PayloadMeta {
                original_source: article.link.clone(),
            },
        }
    }
}

fn default_content(article: &Article) -> String {
    format!(
        "<p>Check out this financial news article: <a href=\"{link}\" target=\"_blank\">{title}</a></p>\
         <p>Source: <a href=\"{link}\" target=\"_blank\">{link}</a></p>",
        link = article.link,
        title = article.title,
    )
}
