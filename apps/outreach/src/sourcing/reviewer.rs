//! Strategic Reviewer — filters the scout's list and formats the hand-off rows.
//!
//! After the model pass, two deterministic passes run: normalization to
//! `Name | Contact | Description` rows, and downgrading of any email that never
//! appeared in the research evidence.

use std::collections::HashSet;

use tracing::warn;

use crate::candidates::{normalize_candidate_list, rewrite_emails, NOT_FOUND_MARKERS};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, CONTACT_GROUNDING_INSTRUCTION, ENGLISH_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::sourcing::prompts::{REVIEWER_PROMPT_TEMPLATE, REVIEWER_SYSTEM};

/// Runs the model review and returns normalized candidate rows.
pub async fn review_list(llm: &dyn TextGenerator, scout_list: &str) -> Result<String, AppError> {
    let prompt = fill_template(
        REVIEWER_PROMPT_TEMPLATE,
        &[
            ("scout_list", scout_list),
            ("contact_instruction", CONTACT_GROUNDING_INSTRUCTION),
            ("language_instruction", ENGLISH_INSTRUCTION),
        ],
    );

    let reviewed = llm
        .generate(&prompt, REVIEWER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Review failed: {e}")))?;

    Ok(normalize_candidate_list(&reviewed))
}

/// Replaces every email occurrence not present in `verified` (lowercased) with
/// `EMAIL_NOT_FOUND`.
pub fn downgrade_unverified_emails(list: &str, verified: &HashSet<String>) -> String {
    list.lines()
        .map(|line| {
            rewrite_emails(line, |email| {
                if verified.contains(&email.to_lowercase()) {
                    email.to_string()
                } else {
                    warn!("Email '{}' not found in research evidence, dropping it", email);
                    NOT_FOUND_MARKERS[0].to_string()
                }
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}
