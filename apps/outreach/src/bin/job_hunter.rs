use anyhow::Result;
use tracing::{error, info};

use outreach::config::Config;
use outreach::errors::AppError;
use outreach::llm_client::LlmClient;
use outreach::research::DuckDuckGoResearch;
use outreach::sourcing::SourcingPipeline;
use outreach::telemetry::init_tracing;

/// Search results kept per query.
const RESULTS_PER_QUERY: usize = 8;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    init_tracing("job-hunter", &config.rust_log);

    info!("Starting job-hunter v{}", env!("CARGO_PKG_VERSION"));
    info!("Searching for startups in {}", config.search_place);

    let llm = LlmClient::new(
        config.api_base.as_str(),
        config.api_key.as_str(),
        config.model.as_str(),
        config.sourcing_temperature,
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    let research = DuckDuckGoResearch::new(RESULTS_PER_QUERY)?;

    match SourcingPipeline::new(&llm, &research, &config).run().await {
        Ok(report) => {
            println!(
                "\nList of {} companies saved to '{}'.",
                report.companies,
                report.path.display()
            );
            println!("You can run `cold-message-refiner` now.");
            Ok(())
        }
        Err(e @ AppError::MissingInput { .. }) => {
            error!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
