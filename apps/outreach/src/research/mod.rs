//! Web research port — search and page scrape, the two tools of the sourcing scout.
//!
//! Default: `DuckDuckGoResearch` (HTML endpoint + plain HTTP fetch).
//! Workflows take `&dyn WebResearch` so tests can script results.

use async_trait::async_trait;
use thiserror::Error;

pub mod duckduckgo;
pub mod html;

pub use duckduckgo::DuckDuckGoResearch;

#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
}

/// One organic search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

#[async_trait]
pub trait WebResearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ResearchError>;

    /// Fetches a page and returns its readable text.
    async fn scrape(&self, url: &str) -> Result<String, ResearchError>;
}
