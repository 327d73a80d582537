use anyhow::{Context, Result};
use model::ai::AiProjectInput;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Computes an AI-project quote from a JSON parameter file and writes the
/// proposal PDF next to it.
pub fn export_ai_pdf(input_path: &Path, output_path: &Path) -> Result<()> {
    info!("Rendering AI proposal PDF");
    debug!("Input file: {}", input_path.display());

    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;
    let input: AiProjectInput =
        serde_json::from_str(&raw).context("invalid AI project parameter file")?;

    let result = compute::ai_project::calculate(&input);
    let bytes = report::pdf::ai_proposal_pdf(&input, &result, chrono::Local::now().naive_local())
        .context("failed to render proposal")?;

    fs::write(output_path, bytes)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!("Proposal written to {}", output_path.display());
    Ok(())
}
