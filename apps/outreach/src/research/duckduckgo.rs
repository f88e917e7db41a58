use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::research::html::{html_to_text, parse_search_results};
use crate::research::{ResearchError, SearchHit, WebResearch};

const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
/// Scraped pages are cut to this many characters before they reach a prompt.
const MAX_PAGE_CHARS: usize = 6_000;

/// Search via DuckDuckGo's HTML endpoint, scrape via plain GET.
#[derive(Clone)]
pub struct DuckDuckGoResearch {
    client: Client,
    max_results: usize,
}

impl DuckDuckGoResearch {
    pub fn new(max_results: usize) -> Result<Self, ResearchError> {
        Ok(Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()?,
            max_results,
        })
    }

    async fn fetch(&self, request: reqwest::RequestBuilder, url: &str) -> Result<String, ResearchError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResearchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl WebResearch for DuckDuckGoResearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ResearchError> {
        let request = self.client.post(SEARCH_URL).form(&[("q", query), ("kl", "wt-wt")]);
        let page = self.fetch(request, SEARCH_URL).await?;

        let mut hits = parse_search_results(&page);
        hits.truncate(self.max_results);
        debug!("Search '{}' returned {} hits", query, hits.len());
        Ok(hits)
    }

    async fn scrape(&self, url: &str) -> Result<String, ResearchError> {
        let page = self.fetch(self.client.get(url), url).await?;
        let text = truncate_chars(html_to_text(&page), MAX_PAGE_CHARS);
        debug!("Scraped {} ({} chars)", url, text.len());
        Ok(text)
    }
}

fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
    text
}
