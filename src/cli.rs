use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{TextReportKind, export_ai_pdf, export_text_report, serve};

#[derive(Parser)]
#[command(name = "pricerust")]
#[command(about = "Pricing calculators and proposal exports for an automation/AI consultancy")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Render an AI-project proposal PDF from a JSON parameter file
    ///
    /// The input file holds one AiProjectInput record, the same JSON the
    /// /api/v1/calculators/ai-project endpoint accepts.
    AiPdf {
        /// Path to the JSON file with the AI project parameters
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the rendered PDF
        #[arg(short, long, default_value = "proposta_ia.pdf")]
        output: PathBuf,
    },
    /// Render a plain-text scenario report from a JSON parameter file
    ///
    /// The input file holds `{"scenario": ..., "participants": [...]}` for
    /// the selected calculator.
    Report {
        /// Which calculator the input belongs to
        #[arg(short, long, value_enum)]
        kind: TextReportKind,

        /// Path to the JSON file with the scenario
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the report
        #[arg(short, long, default_value = "relatorio.txt")]
        output: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::AiPdf { input, output } => {
                export_ai_pdf(&input, &output)?;
            }
            Commands::Report {
                kind,
                input,
                output,
            } => {
                export_text_report(kind, &input, &output)?;
            }
        }
        Ok(())
    }
}
