//! Sourcing pipeline — orchestrates profiler → scout → reviewer and writes the
//! candidate list file.
//!
//! Flow: read_cv → profile_skills → plan_queries → gather_evidence → compile_list →
//!       review_list → downgrade_unverified_emails → save_candidate_list.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::candidates::{candidate_lines, save_candidate_list};
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::research::WebResearch;
use crate::sourcing::profiler::{profile_skills, read_cv};
use crate::sourcing::reviewer::{downgrade_unverified_emails, review_list};
use crate::sourcing::scout::{compile_list, gather_evidence, plan_queries};

/// What one sourcing run produced.
#[derive(Debug, Clone)]
pub struct SourcingReport {
    pub path: PathBuf,
    pub list: String,
    pub companies: usize,
}

pub struct SourcingPipeline<'a> {
    llm: &'a dyn TextGenerator,
    research: &'a dyn WebResearch,
    config: &'a Config,
}

impl<'a> SourcingPipeline<'a> {
    pub fn new(llm: &'a dyn TextGenerator, research: &'a dyn WebResearch, config: &'a Config) -> Self {
        Self {
            llm,
            research,
            config,
        }
    }

    /// Runs all three agents and overwrites the candidate list file.
    pub async fn run(&self) -> Result<SourcingReport, AppError> {
        let config = self.config;

        // Step 1: CV analysis
        let cv_text = read_cv(&config.cv_path).await?;
        let skills = profile_skills(self.llm, &cv_text).await?;

        // Step 2: Company search
        let queries = plan_queries(self.llm, &skills, &config.search_place).await?;
        let evidence = gather_evidence(self.research, &queries, config.max_scraped_pages).await;
        let scout_list = compile_list(
            self.llm,
            &skills,
            &config.search_place,
            config.target_companies,
            &evidence,
        )
        .await?;

        // Step 3: Review / filter
        let reviewed = review_list(self.llm, &scout_list).await?;
        let list = downgrade_unverified_emails(&reviewed, &evidence.verified_emails());

        let companies = candidate_lines(&list).len();
        if companies == 0 {
            warn!("Review produced no candidate rows; the refiner will have nothing to pick");
        }

        save_candidate_list(&config.company_list_path, &list).await?;
        info!(
            "Sourced {} companies into {}",
            companies,
            config.company_list_path.display()
        );

        Ok(SourcingReport {
            path: config.company_list_path.clone(),
            list,
            companies,
        })
    }
}
