//! Critic — checks a draft against a fixed checklist and either approves it or
//! returns notes for the next writer attempt.

use tracing::info;

use crate::candidates::NO_CONTACT_SENTINEL;
use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::TextGenerator;
use crate::profile::CandidateProfile;
use crate::refinement::prompts::{CRITIC_PROMPT_TEMPLATE, CRITIC_SYSTEM};
use crate::refinement::state::DraftStatus;

/// Literal token whose presence in a critique means "pass".
pub const APPROVAL_KEYWORD: &str = "APPROVED";

/// The single approval rule: keyword membership anywhere in the critique.
pub fn is_approved(critique: &str) -> bool {
    critique.contains(APPROVAL_KEYWORD)
}

pub struct Critic<'a> {
    llm: &'a dyn TextGenerator,
    profile: &'a CandidateProfile,
}

impl<'a> Critic<'a> {
    pub fn new(llm: &'a dyn TextGenerator, profile: &'a CandidateProfile) -> Self {
        Self { llm, profile }
    }

    /// Returns the critique text for `draft`. Drafts the writer produced without the
    /// model are approved as they are.
    pub async fn review(&self, draft: &str, status: DraftStatus) -> Result<String, AppError> {
        if !status.needs_review() {
            info!("Draft was not generated, nothing to review");
            return Ok(APPROVAL_KEYWORD.to_string());
        }

        info!("Critic validating draft strategy");
        let prompt = fill_template(
            CRITIC_PROMPT_TEMPLATE,
            &[
                ("market", self.profile.target_market),
                ("draft", draft),
                ("availability", self.profile.availability),
                ("tech", self.profile.tech),
                ("sentinel", NO_CONTACT_SENTINEL),
                ("approval_keyword", APPROVAL_KEYWORD),
            ],
        );

        let critique = self
            .llm
            .generate(&prompt, CRITIC_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Critic LLM call failed: {e}")))?;

        Ok(critique.trim().to_string())
    }
}
