pub mod candidates;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod profile;
pub mod refinement;
pub mod research;
pub mod sourcing;
pub mod telemetry;
