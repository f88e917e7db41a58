use anyhow::Result;
use tracing::{error, info};

use outreach::candidates::load_candidate_list;
use outreach::config::Config;
use outreach::errors::AppError;
use outreach::llm_client::LlmClient;
use outreach::profile::CandidateProfile;
use outreach::refinement::RefinementWorkflow;
use outreach::telemetry::init_tracing;

const RULE_WIDTH: usize = 50;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    init_tracing("cold-message-refiner", &config.rust_log);

    info!("Starting cold-message-refiner v{}", env!("CARGO_PKG_VERSION"));

    let candidate_list = match load_candidate_list(&config.company_list_path).await {
        Ok(list) => list,
        Err(e @ AppError::MissingInput { .. }) => {
            error!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let llm = LlmClient::new(
        config.api_base.as_str(),
        config.api_key.as_str(),
        config.model.as_str(),
        config.writer_temperature,
    )?;
    info!(
        "LLM client initialized (model: {}, max iterations: {})",
        llm.model(),
        config.max_iterations
    );

    let profile = CandidateProfile::default();
    let outcome = RefinementWorkflow::new(&llm, &config, &profile)
        .run(candidate_list)
        .await?;

    info!(
        "Refinement finished after {} iteration(s), approved: {}, status: {:?}",
        outcome.iterations, outcome.approved, outcome.status
    );

    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}");
    println!("FINAL MESSAGE (COPY AND SEND)");
    println!("{rule}");
    println!("{}", outcome.final_draft);
    println!("{rule}");

    Ok(())
}
