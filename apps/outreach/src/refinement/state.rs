use crate::refinement::selector::Target;

/// How the latest draft came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    /// The model wrote an email for a target with a usable contact.
    Written,
    /// The selected target had no email or URL; nothing was generated.
    SkippedNoContact,
    /// The candidate list held no usable rows.
    NoCandidates,
}

impl DraftStatus {
    /// Whether the draft came from the model and so needs a review.
    pub fn needs_review(self) -> bool {
        matches!(self, DraftStatus::Written)
    }
}

/// Mutable record threaded through one refinement run.
///
/// `candidate_list` is never mutated. `draft` and `critique` are overwritten on every
/// iteration. `iterations` only moves forward and never passes `max_iterations`.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    pub candidate_list: String,
    pub draft: String,
    pub critique: Option<String>,
    pub iterations: u32,
    pub max_iterations: u32,
    pub status: DraftStatus,
    /// First target chosen in this run. Only reused when targets are pinned.
    pub pinned_target: Option<Target>,
}

impl WorkflowState {
    pub fn new(candidate_list: impl Into<String>, max_iterations: u32) -> Self {
        Self {
            candidate_list: candidate_list.into(),
            draft: String::new(),
            critique: None,
            iterations: 0,
            max_iterations,
            status: DraftStatus::Written,
            pinned_target: None,
        }
    }

    pub fn budget_exhausted(&self) -> bool {
        self.iterations >= self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_empty() {
        let state = WorkflowState::new("Acme | a@b.co | x", 3);
        assert_eq!(state.iterations, 0);
        assert!(state.draft.is_empty());
        assert!(state.critique.is_none());
        assert!(!state.budget_exhausted());
    }

    #[test]
    fn test_only_written_drafts_need_review() {
        assert!(DraftStatus::Written.needs_review());
        assert!(!DraftStatus::SkippedNoContact.needs_review());
        assert!(!DraftStatus::NoCandidates.needs_review());
    }

    #[test]
    fn test_budget_exhausted_at_ceiling() {
        let mut state = WorkflowState::new("", 3);
        state.iterations = 3;
        assert!(state.budget_exhausted());
    }
}
