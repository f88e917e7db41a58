//! CV Profiler — reads the CV (the file-read tool) and condenses it into hard skills.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, ENGLISH_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::sourcing::prompts::{PROFILER_PROMPT_TEMPLATE, PROFILER_SYSTEM};

/// Reads the CV file.
pub async fn read_cv(path: &Path) -> Result<String, AppError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) if text.trim().is_empty() => Err(AppError::missing_input(
            path,
            "The CV file is empty. Point CV_PATH at your CV.",
        )),
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::missing_input(
            path,
            "Point CV_PATH at your CV (markdown or plain text).",
        )),
        Err(e) => Err(AppError::Io(e)),
    }
}

/// Summarizes the CV into top technologies and projects.
pub async fn profile_skills(llm: &dyn TextGenerator, cv_text: &str) -> Result<String, AppError> {
    let prompt = fill_template(
        PROFILER_PROMPT_TEMPLATE,
        &[
            ("language_instruction", ENGLISH_INSTRUCTION),
            ("cv_text", cv_text),
        ],
    );

    let summary = llm
        .generate(&prompt, PROFILER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("CV profiling failed: {e}")))?;

    info!("CV profiled ({} chars of skills summary)", summary.len());
    Ok(summary.trim().to_string())
}
