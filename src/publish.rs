//! Downstream publishers for prepared draft posts.
//!
//! The pipeline hands each unique article to a [`Publisher`]; which
//! implementation runs is decided by configuration at startup, never by
//! branching inside the pipeline.
//!
//! Two implementations exist:
//! - [`DraftPublisher`] (default): formats the draft payload and logs it.
//!   Performs no network I/O and never fails.
//! - [`RestPublisher`]: submits the payload to an authenticated REST endpoint
//!   with HTTP basic auth. A failed submission is a per-article error the
//!   orchestrator survives.

use crate::models::{Article, DraftPayload};
use crate::utils::{post_timestamp, truncate_for_log};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Capability for submitting one prepared article downstream.
pub trait Publisher {
    /// Prepare and submit a draft post for `article`.
    async fn publish(&self, article: &Article) -> Result<(), Box<dyn Error>>;
}

/// Publisher that only formats and logs the draft payload.
///
/// Matches the behavior of a dry run: the payload is constructed exactly as
/// the REST publisher would send it, then logged instead of transmitted.
#[derive(Debug, Default)]
pub struct DraftPublisher;

impl DraftPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl Publisher for DraftPublisher {
    #[instrument(level = "info", skip_all, fields(title = %article.title))]
    async fn publish(&self, article: &Article) -> Result<(), Box<dyn Error>> {
        let payload = DraftPayload::from_article(article, None, post_timestamp());

        info!(title = %payload.title, link = %payload.meta.original_source, "Prepared draft post");
        debug!(payload = %serde_json::to_string_pretty(&payload)?, "Draft post payload");
        Ok(())
    }
}

/// Publisher that submits draft posts to a REST endpoint with basic auth.
#[derive(Debug)]
pub struct RestPublisher {
    client: reqwest::Client,
    endpoint: String,
    user: String,
    app_password: String,
}

impl RestPublisher {
    /// Build a publisher for `endpoint`, authenticating as `user` with an
    /// application password.
    pub fn new(endpoint: String, user: String, app_password: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            user,
            app_password,
        })
    }
}

impl Publisher for RestPublisher {
    #[instrument(level = "info", skip_all, fields(title = %article.title))]
    async fn publish(&self, article: &Article) -> Result<(), Box<dyn Error>> {
        let payload = DraftPayload::from_article(article, None, post_timestamp());

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.user, Some(&self.app_password))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!(
                "publish endpoint returned {status}: {}",
                truncate_for_log(&body, 200)
            )
            .into());
        }

        info!(title = %payload.title, %status, "Submitted draft post");
        Ok(())
    }
}
