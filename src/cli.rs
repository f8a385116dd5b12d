//! Command-line interface definitions for FinStream.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Publishing credentials can be provided via command-line flags or
//! environment variables and are only required when `--publish` is set.

use crate::discovery::DomainPolicy;
use crate::filter::default_keywords;
use crate::pipeline::RunOptions;
use clap::Parser;

/// Command-line arguments for the FinStream application.
///
/// # Examples
///
/// ```sh
/// # Dry run: discover sites, filter headlines, log draft payloads
/// finstream
///
/// # Narrow the run to two sites and custom keywords
/// finstream --max-sites 2 -k inflation -k earnings
///
/// # Submit drafts to a real endpoint
/// SITE_URL=https://site.example.com/wp-json/wp/v2/posts \
/// SITE_USER=editor SITE_APP_PASSWORD=secret finstream --publish
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News search query used to discover sites
    #[arg(short, long, default_value = "finance news")]
    pub query: String,

    /// Maximum number of discovered sites to fetch
    #[arg(short, long, default_value_t = 3)]
    pub max_sites: usize,

    /// Keyword a headline must contain (repeatable; defaults to the built-in finance set)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// Policy for accepting discovered hosts
    #[arg(long, value_enum, default_value = "allow-list")]
    pub discovery_policy: DomainPolicy,

    /// Submit drafts to the configured REST endpoint instead of logging them
    #[arg(long)]
    pub publish: bool,

    /// Draft post endpoint URL
    #[arg(long, env = "SITE_URL", required_if_eq("publish", "true"))]
    pub site_url: Option<String>,

    /// Username for the publishing endpoint
    #[arg(long, env = "SITE_USER", required_if_eq("publish", "true"))]
    pub site_user: Option<String>,

    /// Application password for the publishing endpoint
    #[arg(long, env = "SITE_APP_PASSWORD", required_if_eq("publish", "true"))]
    pub site_app_password: Option<String>,
}

impl Cli {
    /// Build pipeline options from the parsed arguments. An empty keyword
    /// list means the built-in default set.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            query: self.query.clone(),
            max_sites: self.max_sites,
            policy: self.discovery_policy,
            keywords: if self.keywords.is_empty() {
                default_keywords()
            } else {
                self.keywords.clone()
            },
        }
    }
}
