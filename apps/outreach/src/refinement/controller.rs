//! Loop Controller — the writer/critic state machine.
//!
//! ```text
//!   Write ──► Critique ──► Done      (approved, or iterations == ceiling)
//!     ▲          │
//!     └──────────┘                   (otherwise: revise and retry)
//! ```
//!
//! The ceiling bounds spend on the external service regardless of what the critic says.

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::profile::CandidateProfile;
use crate::refinement::critic::{is_approved, Critic};
use crate::refinement::state::{DraftStatus, WorkflowState};
use crate::refinement::writer::DraftWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Write,
    Critique,
    Done,
}

/// Transition out of `Critique`.
pub fn after_critique(critique: &str, iterations: u32, max_iterations: u32) -> Step {
    if is_approved(critique) || iterations >= max_iterations {
        Step::Done
    } else {
        Step::Write
    }
}

/// Result of one refinement run.
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    pub final_draft: String,
    pub iterations: u32,
    pub approved: bool,
    pub status: DraftStatus,
    pub last_critique: Option<String>,
}

pub struct RefinementWorkflow<'a> {
    writer: DraftWriter<'a>,
    critic: Critic<'a>,
    max_iterations: u32,
}

impl<'a> RefinementWorkflow<'a> {
    pub fn new(llm: &'a dyn TextGenerator, config: &Config, profile: &'a CandidateProfile) -> Self {
        Self::with_options(llm, profile, config.max_iterations, config.pin_target)
    }

    pub fn with_options(
        llm: &'a dyn TextGenerator,
        profile: &'a CandidateProfile,
        max_iterations: u32,
        pin_target: bool,
    ) -> Self {
        Self {
            writer: DraftWriter::new(llm, profile, pin_target),
            critic: Critic::new(llm, profile),
            max_iterations: max_iterations.max(1),
        }
    }

    /// Runs the loop from `Write` to `Done` over one candidate list.
    pub async fn run(&self, candidate_list: String) -> Result<WorkflowOutcome, AppError> {
        let mut state = WorkflowState::new(candidate_list, self.max_iterations);
        let mut approved = false;
        let mut step = Step::Write;

        while step != Step::Done {
            step = match step {
                Step::Write => {
                    self.writer.write(&mut state).await?;
                    Step::Critique
                }
                Step::Critique => {
                    let critique = self.critic.review(&state.draft, state.status).await?;
                    approved = is_approved(&critique);
                    info!(
                        "Critique after attempt {}/{}: {}",
                        state.iterations,
                        state.max_iterations,
                        if approved { "approved" } else { "needs revision" }
                    );
                    let next = after_critique(&critique, state.iterations, state.max_iterations);
                    state.critique = Some(critique);
                    next
                }
                Step::Done => Step::Done,
            };
        }

        if !approved {
            info!(
                "Iteration ceiling ({}) reached without approval, keeping the latest draft",
                state.max_iterations
            );
        }

        Ok(WorkflowOutcome {
            final_draft: state.draft,
            iterations: state.iterations,
            approved,
            status: state.status,
            last_critique: state.critique,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::refinement::prompts::WRITER_SYSTEM;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Answers writer calls with numbered drafts and critic calls from a script.
    struct ScriptedLlm {
        critiques: Mutex<VecDeque<&'static str>>,
        writer_calls: Mutex<u32>,
        critic_calls: Mutex<u32>,
    }

    impl ScriptedLlm {
        fn new(critiques: &[&'static str]) -> Self {
            Self {
                critiques: Mutex::new(critiques.iter().copied().collect()),
                writer_calls: Mutex::new(0),
                critic_calls: Mutex::new(0),
            }
        }

        fn writer_calls(&self) -> u32 {
            *self.writer_calls.lock().expect("lock poisoned")
        }

        fn critic_calls(&self) -> u32 {
            *self.critic_calls.lock().expect("lock poisoned")
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedLlm {
        async fn generate(&self, _prompt: &str, system: &str) -> Result<String, LlmError> {
            if system == WRITER_SYSTEM {
                let mut calls = self.writer_calls.lock().expect("lock poisoned");
                *calls += 1;
                return Ok(format!("To: hello@acme.ai\nSubject: Draft {}", *calls));
            }
            *self.critic_calls.lock().expect("lock poisoned") += 1;
            Ok(self
                .critiques
                .lock()
                .expect("lock poisoned")
                .pop_front()
                .unwrap_or("Still needs work.")
                .to_string())
        }
    }

    const ACME: &str = "Acme AI | hello@acme.ai | AI tooling";

    #[test]
    fn test_after_critique_transitions() {
        assert_eq!(after_critique("APPROVED", 1, 3), Step::Done);
        assert_eq!(after_critique("fix tone", 1, 3), Step::Write);
        assert_eq!(after_critique("fix tone", 3, 3), Step::Done);
        assert_eq!(after_critique("APPROVED", 3, 3), Step::Done);
    }

    #[tokio::test]
    async fn test_approval_on_first_attempt_stops_early() {
        let llm = ScriptedLlm::new(&["Great offer. APPROVED"]);
        let profile = CandidateProfile::default();
        let workflow = RefinementWorkflow::with_options(&llm, &profile, 3, false);

        let outcome = workflow.run(ACME.to_string()).await.unwrap();

        assert!(outcome.approved);
        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.final_draft, "To: hello@acme.ai\nSubject: Draft 1");
        assert_eq!(outcome.status, DraftStatus::Written);
        assert_eq!(llm.writer_calls(), 1);
        assert_eq!(llm.critic_calls(), 1);
    }

    #[tokio::test]
    async fn test_revision_then_approval() {
        let llm = ScriptedLlm::new(&["Dates missing.", "APPROVED"]);
        let profile = CandidateProfile::default();
        let workflow = RefinementWorkflow::with_options(&llm, &profile, 3, false);

        let outcome = workflow.run(ACME.to_string()).await.unwrap();

        assert!(outcome.approved);
        assert_eq!(outcome.iterations, 2);
        assert_eq!(outcome.final_draft, "To: hello@acme.ai\nSubject: Draft 2");
    }

    #[tokio::test]
    async fn test_ceiling_terminates_without_approval() {
        let llm = ScriptedLlm::new(&[]);
        let profile = CandidateProfile::default();
        let workflow = RefinementWorkflow::with_options(&llm, &profile, 3, false);

        let outcome = workflow.run(ACME.to_string()).await.unwrap();

        assert!(!outcome.approved);
        assert_eq!(outcome.iterations, 3);
        assert_eq!(llm.writer_calls(), 3);
        assert_eq!(llm.critic_calls(), 3);
        assert_eq!(outcome.final_draft, "To: hello@acme.ai\nSubject: Draft 3");
        assert_eq!(outcome.last_critique.as_deref(), Some("Still needs work."));
    }

    #[tokio::test]
    async fn test_empty_list_goes_straight_to_done() {
        let llm = ScriptedLlm::new(&[]);
        let profile = CandidateProfile::default();
        let workflow = RefinementWorkflow::with_options(&llm, &profile, 3, false);

        let outcome = workflow.run(String::new()).await.unwrap();

        assert_eq!(outcome.status, DraftStatus::NoCandidates);
        assert!(outcome.final_draft.starts_with("ERROR:"));
        assert_eq!(outcome.iterations, 3);
        assert_eq!(llm.writer_calls(), 0);
        assert_eq!(llm.critic_calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_contact_is_terminal_skip() {
        let llm = ScriptedLlm::new(&[]);
        let profile = CandidateProfile::default();
        let workflow = RefinementWorkflow::with_options(&llm, &profile, 3, false);

        let outcome = workflow
            .run("Gamma Robotics | no public contact | hardware".to_string())
            .await
            .unwrap();

        assert_eq!(outcome.status, DraftStatus::SkippedNoContact);
        assert!(outcome.final_draft.starts_with("SKIPPED:"));
        assert_eq!(outcome.iterations, 1);
        assert_eq!(llm.writer_calls(), 0);
        assert_eq!(llm.critic_calls(), 0);
    }

    #[tokio::test]
    async fn test_counter_never_exceeds_ceiling() {
        for ceiling in 1..=5 {
            let llm = ScriptedLlm::new(&[]);
            let profile = CandidateProfile::default();
            let workflow = RefinementWorkflow::with_options(&llm, &profile, ceiling, false);

            let outcome = workflow.run(ACME.to_string()).await.unwrap();

            assert_eq!(outcome.iterations, ceiling);
            assert_eq!(llm.writer_calls(), ceiling);
        }
    }

    #[tokio::test]
    async fn test_new_reads_ceiling_from_config() {
        let config = Config::from_lookup(|key| match key {
            "GROQ_API_KEY" => Some("gsk".to_string()),
            "MAX_ITERATIONS" => Some("2".to_string()),
            _ => None,
        })
        .unwrap();
        let llm = ScriptedLlm::new(&[]);
        let profile = CandidateProfile::default();
        let workflow = RefinementWorkflow::new(&llm, &config, &profile);

        let outcome = workflow.run(ACME.to_string()).await.unwrap();

        assert_eq!(outcome.iterations, 2);
    }
}
