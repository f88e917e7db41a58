// Refinement pipeline: picks one company from the candidate list and drafts a cold
// email for it, revising against a critic until approval or the iteration ceiling.
// All LLM calls go through the TextGenerator port; target and contact selection never do.

pub mod controller;
pub mod critic;
pub mod prompts;
pub mod selector;
pub mod state;
pub mod writer;

pub use controller::{RefinementWorkflow, Step, WorkflowOutcome};
pub use state::{DraftStatus, WorkflowState};
