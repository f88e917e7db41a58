//! Draft Writer — one email draft per invocation.
//!
//! Flow: select target → resolve contact → (skip if no contact) → LLM draft.
//! Failures of the LLM call are not retried here; they abort the run.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, ENGLISH_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::profile::CandidateProfile;
use crate::refinement::prompts::{WRITER_PROMPT_TEMPLATE, WRITER_SYSTEM};
use crate::refinement::selector::{select_target, Target};
use crate::refinement::state::{DraftStatus, WorkflowState};

/// Prefix of a draft that was skipped because the target has no contact.
pub const SKIPPED_MARKER: &str = "SKIPPED:";
/// Prefix of the draft emitted when the candidate list is empty.
pub const EMPTY_LIST_MARKER: &str = "ERROR:";

pub struct DraftWriter<'a> {
    llm: &'a dyn TextGenerator,
    profile: &'a CandidateProfile,
    pin_target: bool,
}

impl<'a> DraftWriter<'a> {
    pub fn new(llm: &'a dyn TextGenerator, profile: &'a CandidateProfile, pin_target: bool) -> Self {
        Self {
            llm,
            profile,
            pin_target,
        }
    }

    /// Runs one writer step, updating `state.draft`, `state.status` and the counter.
    pub async fn write(&self, state: &mut WorkflowState) -> Result<DraftStatus, AppError> {
        info!(
            "Writer attempt {}/{}",
            state.iterations + 1,
            state.max_iterations
        );

        let Some(target) = self.choose_target(state) else {
            warn!("Candidate list has no usable rows, ending the run");
            state.draft = format!("{EMPTY_LIST_MARKER} empty candidate list.");
            state.iterations = state.max_iterations;
            state.status = DraftStatus::NoCandidates;
            return Ok(state.status);
        };

        info!("Target selected: {}", target.line);
        info!("Contact resolved: {}", target.contact);

        if target.contact.is_missing() {
            warn!("No contact found for '{}', skipping", target.record.name);
            state.draft = format!(
                "{SKIPPED_MARKER} no contact found for '{}'. Skipping this target.",
                target.record.name
            );
            state.iterations += 1;
            state.status = DraftStatus::SkippedNoContact;
            return Ok(state.status);
        }

        let prompt = self.build_prompt(&target, state.critique.as_deref());
        let draft = self
            .llm
            .generate(&prompt, WRITER_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Draft writer LLM call failed: {e}")))?;

        state.draft = draft.trim().to_string();
        state.iterations += 1;
        state.status = DraftStatus::Written;
        Ok(state.status)
    }

    fn choose_target(&self, state: &mut WorkflowState) -> Option<Target> {
        if self.pin_target {
            if let Some(pinned) = &state.pinned_target {
                return Some(pinned.clone());
            }
        }

        let target = select_target(&state.candidate_list, &mut rand::rng())?;
        if state.pinned_target.is_none() {
            state.pinned_target = Some(target.clone());
        }
        Some(target)
    }

    fn build_prompt(&self, target: &Target, critique: Option<&str>) -> String {
        let profile = self.profile.to_prompt_block();
        fill_template(
            WRITER_PROMPT_TEMPLATE,
            &[
                ("target_info", target.line.as_str()),
                ("contact", target.contact.as_str()),
                ("profile", profile.as_str()),
                ("language_instruction", ENGLISH_INSTRUCTION),
                ("critique", critique.unwrap_or("None")),
            ],
        )
    }
}
