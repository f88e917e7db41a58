//! Candidate list — the pipe-delimited hand-off file between the two pipelines.
//!
//! One candidate per line: `Name | Contact | Why it fits`. Parsing is tolerant; the
//! only hard rule for a candidate row is that it contains a `|`.
//!
//! Contact extraction is deterministic pattern matching over the raw line. The contact
//! used downstream is always a byte-for-byte slice of the source text.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::errors::AppError;

pub const FIELD_SEPARATOR: char = '|';

/// Rendered in place of a contact when neither an email nor a URL was found.
pub const NO_CONTACT_SENTINEL: &str = "MISSING_EMAIL";

/// Markers the sourcing agents write when they could not find an email.
pub const NOT_FOUND_MARKERS: &[&str] = &["EMAIL_NOT_FOUND", "NO_EMAIL_FOUND"];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("email pattern is valid")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:https?://|www\.)[^\s|<>"']+"#).expect("url pattern is valid")
});

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

/// Resolved contact for one candidate line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contact {
    Email(String),
    Url(String),
    Missing,
}

impl Contact {
    /// Resolves a contact from a raw line: email first, then URL, then the sentinel.
    pub fn extract(line: &str) -> Self {
        if let Some(email) = first_email(line) {
            Contact::Email(email.to_string())
        } else if let Some(url) = first_url(line) {
            Contact::Url(url.to_string())
        } else {
            Contact::Missing
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Contact::Email(v) | Contact::Url(v) => v,
            Contact::Missing => NO_CONTACT_SENTINEL,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Contact::Missing)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First email address anywhere in `text`.
pub fn first_email(text: &str) -> Option<&str> {
    EMAIL_RE.find(text).map(|m| m.as_str())
}

/// Every distinct email address in `text`, in order of appearance.
pub fn all_emails(text: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for m in EMAIL_RE.find_iter(text) {
        let email = m.as_str();
        if !seen.iter().any(|e| e.eq_ignore_ascii_case(email)) {
            seen.push(email.to_string());
        }
    }
    seen
}

/// Rewrites every email occurrence in `text` through `rewrite`, one match at a time.
///
/// Only whole matches are touched, so a short address inside a longer one is never
/// rewritten on its own.
pub fn rewrite_emails<F>(text: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> String,
{
    EMAIL_RE
        .replace_all(text, |caps: &regex::Captures<'_>| rewrite(&caps[0]))
        .into_owned()
}

/// First URL in `text`, with trailing sentence punctuation removed.
pub fn first_url(text: &str) -> Option<&str> {
    URL_RE
        .find(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', ')', ']']))
        .filter(|url| !url.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate record
// ────────────────────────────────────────────────────────────────────────────

/// One parsed candidate row. Missing fields are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub name: String,
    pub contact_field: String,
    pub description: String,
}

impl CandidateRecord {
    /// Tolerant parse: extra fields fold into the description.
    pub fn parse(line: &str) -> Self {
        let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
        let name = fields.next().unwrap_or_default().to_string();
        let contact_field = fields.next().unwrap_or_default().to_string();
        let description = fields.collect::<Vec<_>>().join(" | ");
        Self {
            name,
            contact_field,
            description,
        }
    }

    /// True when the contact field holds one of the sourcing "not found" markers.
    pub fn contact_marked_not_found(&self) -> bool {
        NOT_FOUND_MARKERS
            .iter()
            .any(|m| self.contact_field.eq_ignore_ascii_case(m))
    }
}

/// A line qualifies as a candidate row when it is non-blank and contains a separator.
pub fn is_candidate_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.contains(FIELD_SEPARATOR)
}

/// Trimmed candidate rows of a raw list, in file order.
pub fn candidate_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|l| is_candidate_line(l))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization of sourcing output
// ────────────────────────────────────────────────────────────────────────────

/// Cleans model output into the hand-off format: one `a | b | c` row per line.
///
/// Drops code fences, prose lines without a separator, markdown table rules and the
/// `Name | ...` header row; strips list bullets, numbering and bold markers.
pub fn normalize_candidate_list(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.starts_with("```"))
        .map(strip_list_prefix)
        .map(|l| l.trim_matches('|').trim())
        .filter(|l| is_candidate_line(l))
        .filter(|l| !is_table_rule(l))
        .filter(|l| !is_header_row(l))
        .map(|l| {
            l.split(FIELD_SEPARATOR)
                .map(|f| f.replace("**", "").split_whitespace().collect::<Vec<_>>().join(" "))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_list_prefix(line: &str) -> &str {
    let line = line.trim_start_matches(['-', '*', '•']).trim_start();
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim_start();
        }
    }
    line
}

fn is_table_rule(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

fn is_header_row(line: &str) -> bool {
    let record = CandidateRecord::parse(line);
    let name = record.name.replace("**", "").to_ascii_lowercase();
    matches!(name.as_str(), "name" | "company" | "company name")
}

// ────────────────────────────────────────────────────────────────────────────
// File hand-off
// ────────────────────────────────────────────────────────────────────────────

/// Reads the candidate list written by the sourcing pipeline.
pub async fn load_candidate_list(path: &Path) -> Result<String, AppError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            info!("Loaded candidate list from {}", path.display());
            Ok(text)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::missing_input(
            path,
            "Run `job-hunter` first to find companies.",
        )),
        Err(e) => Err(AppError::Io(e)),
    }
}

/// Overwrites the candidate list file.
pub async fn save_candidate_list(path: &Path, list: &str) -> Result<(), AppError> {
    let mut contents = list.trim_end().to_string();
    contents.push('\n');
    tokio::fs::write(path, contents).await?;
    info!("Candidate list saved to {}", path.display());
    Ok(())
}
