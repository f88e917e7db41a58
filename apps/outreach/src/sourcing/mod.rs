// Sourcing pipeline: CV profiler → startup scout → strategic reviewer.
// Produces the pipe-delimited candidate list consumed by the refinement pipeline.
// All LLM calls go through the TextGenerator port; web access through WebResearch.

pub mod pipeline;
pub mod profiler;
pub mod prompts;
pub mod reviewer;
pub mod scout;

pub use pipeline::{SourcingPipeline, SourcingReport};
