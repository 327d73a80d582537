use anyhow::{Context, Result};
use clap::ValueEnum;
use model::flat::FlatScenarioInput;
use model::hourly::HourlyScenarioInput;
use model::participant::Participant;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Which calculator a text-report input file belongs to.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TextReportKind {
    Flat,
    Hourly,
}

/// Parameter file for a flat-fee report.
#[derive(Debug, Deserialize)]
struct FlatReportFile {
    scenario: FlatScenarioInput,
    #[serde(default)]
    participants: Vec<Participant>,
}

/// Parameter file for an hourly-rate report.
#[derive(Debug, Deserialize)]
struct HourlyReportFile {
    scenario: HourlyScenarioInput,
    #[serde(default)]
    participants: Vec<Participant>,
}

/// Computes one scenario from a JSON parameter file and writes its plain-text
/// report.
pub fn export_text_report(kind: TextReportKind, input_path: &Path, output_path: &Path) -> Result<()> {
    info!("Rendering {:?} scenario report", kind);
    debug!("Input file: {}", input_path.display());

    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;

    let content = match kind {
        TextReportKind::Flat => {
            let file: FlatReportFile =
                serde_json::from_str(&raw).context("invalid flat scenario parameter file")?;
            let result = compute::flat::calculate(&file.scenario, &file.participants, None);
            report::text::flat_scenario_report(&result)
        }
        TextReportKind::Hourly => {
            let file: HourlyReportFile =
                serde_json::from_str(&raw).context("invalid hourly scenario parameter file")?;
            let result = compute::hourly::calculate(&file.scenario, &file.participants);
            report::text::hourly_scenario_report(&result)
        }
    };

    fs::write(output_path, content)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!("Report written to {}", output_path.display());
    Ok(())
}
