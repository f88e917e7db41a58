//! Startup Scout — plans searches, gathers evidence with the research tools, and has
//! the model compile a raw company list from that evidence only.
//!
//! Flow: plan_queries → gather_evidence (search + bounded scrape) → compile_list.
//! Search and scrape failures are logged and skipped; a run with no evidence still
//! reaches the model, which then reports what it cannot verify.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::candidates::all_emails;
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, CONTACT_GROUNDING_INSTRUCTION, ENGLISH_INSTRUCTION};
use crate::llm_client::{generate_json, LlmError, TextGenerator};
use crate::research::{SearchHit, WebResearch};
use crate::sourcing::prompts::{
    QUERY_PLAN_PROMPT_TEMPLATE, QUERY_PLAN_SYSTEM, SCOUT_PROMPT_TEMPLATE, SCOUT_SYSTEM,
};

/// Appended to every query to keep job boards out of the results.
pub const JOB_BOARD_EXCLUSIONS: &str =
    "-site:indeed.com -site:linkedin.com/jobs -site:glassdoor.com";
pub const MAX_QUERIES: usize = 4;
/// Per-page excerpt length inside the scout prompt.
const EXCERPT_CHARS: usize = 1_500;

// ────────────────────────────────────────────────────────────────────────────
// Evidence
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ScrapedPage {
    pub url: String,
    pub text: String,
    /// Emails found in the page text by pattern match.
    pub emails: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Evidence {
    pub hits: Vec<SearchHit>,
    pub pages: Vec<ScrapedPage>,
}

impl Evidence {
    /// Every email that literally appears in a snippet or a scraped page, lowercased.
    pub fn verified_emails(&self) -> HashSet<String> {
        let from_pages = self.pages.iter().flat_map(|p| p.emails.iter().cloned());
        let from_snippets = self.hits.iter().flat_map(|h| all_emails(&h.snippet));
        from_pages
            .chain(from_snippets)
            .map(|e| e.to_lowercase())
            .collect()
    }

    /// Renders the evidence block for the compile prompt.
    pub fn render(&self) -> String {
        if self.hits.is_empty() && self.pages.is_empty() {
            return "(no search results were retrieved)".to_string();
        }

        let mut out = String::from("SEARCH RESULTS:\n");
        for hit in &self.hits {
            out.push_str(&format!("- {} | {} | {}\n", hit.title, hit.url, hit.snippet));
        }

        out.push_str("\nSCRAPED PAGES:\n");
        for page in &self.pages {
            let verified = if page.emails.is_empty() {
                "none".to_string()
            } else {
                page.emails.join(", ")
            };
            let excerpt: String = page.text.chars().take(EXCERPT_CHARS).collect();
            out.push_str(&format!(
                "### {}\nVerified emails: {}\n{}\n\n",
                page.url, verified, excerpt
            ));
        }
        out.trim_end().to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

/// Default queries when the model's plan cannot be parsed.
pub fn fallback_queries(place: &str) -> Vec<String> {
    vec![
        format!("{place} AI startups list 2025"),
        format!("SaaS companies based in {place}"),
        format!("Top Fintech {place} seed stage"),
    ]
}

/// Appends the job-board exclusions to a query.
pub fn with_exclusions(query: &str) -> String {
    format!("{} {}", query.trim(), JOB_BOARD_EXCLUSIONS)
}

/// Asks the model for search queries. Unparsable plans fall back to defaults;
/// transport and API failures propagate.
pub async fn plan_queries(
    llm: &dyn TextGenerator,
    skills: &str,
    place: &str,
) -> Result<Vec<String>, AppError> {
    let max_queries = MAX_QUERIES.to_string();
    let prompt = fill_template(
        QUERY_PLAN_PROMPT_TEMPLATE,
        &[
            ("max_queries", max_queries.as_str()),
            ("place", place),
            ("skills", skills),
        ],
    );

    let planned: Vec<String> = match generate_json(llm, &prompt, QUERY_PLAN_SYSTEM).await {
        Ok(queries) => queries,
        Err(LlmError::Parse(e)) => {
            warn!("Query plan was not a JSON array ({e}), using default queries");
            fallback_queries(place)
        }
        Err(e) => return Err(AppError::Llm(format!("Query planning failed: {e}"))),
    };

    let mut seen = HashSet::new();
    let queries: Vec<String> = planned
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty() && seen.insert(q.to_lowercase()))
        .take(MAX_QUERIES)
        .collect();

    if queries.is_empty() {
        return Ok(fallback_queries(place));
    }
    info!("Planned {} search queries", queries.len());
    Ok(queries)
}

/// Runs every query, de-duplicates hits by URL and scrapes at most `max_pages` of them.
pub async fn gather_evidence(
    research: &dyn WebResearch,
    queries: &[String],
    max_pages: usize,
) -> Evidence {
    let mut evidence = Evidence::default();
    let mut seen_urls = HashSet::new();

    for query in queries {
        let query = with_exclusions(query);
        match research.search(&query).await {
            Ok(hits) => {
                for hit in hits {
                    if seen_urls.insert(hit.url.clone()) {
                        evidence.hits.push(hit);
                    }
                }
            }
            Err(e) => warn!("Search failed for '{}': {}", query, e),
        }
    }

    for hit in evidence.hits.iter().take(max_pages) {
        match research.scrape(&hit.url).await {
            Ok(text) => {
                let emails = all_emails(&text);
                evidence.pages.push(ScrapedPage {
                    url: hit.url.clone(),
                    text,
                    emails,
                });
            }
            Err(e) => warn!("Scrape failed for {}: {}", hit.url, e),
        }
    }

    info!(
        "Research gathered {} hits, {} scraped pages",
        evidence.hits.len(),
        evidence.pages.len()
    );
    evidence
}

/// Has the model compile the raw `Name | Website | Email | Why` list.
pub async fn compile_list(
    llm: &dyn TextGenerator,
    skills: &str,
    place: &str,
    target_companies: u32,
    evidence: &Evidence,
) -> Result<String, AppError> {
    let target = target_companies.to_string();
    let rendered = evidence.render();
    let prompt = fill_template(
        SCOUT_PROMPT_TEMPLATE,
        &[
            ("target_companies", target.as_str()),
            ("place", place),
            ("skills", skills),
            ("evidence", rendered.as_str()),
            ("contact_instruction", CONTACT_GROUNDING_INSTRUCTION),
            ("language_instruction", ENGLISH_INSTRUCTION),
        ],
    );

    llm.generate(&prompt, SCOUT_SYSTEM)
        .await
        .map(|list| list.trim().to_string())
        .map_err(|e| AppError::Llm(format!("Scout compilation failed: {e}")))
}
