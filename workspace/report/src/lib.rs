//! Exportable artifacts derived from calculator results: plain-text scenario
//! reports, the AI-project proposal PDF and the short clipboard summary.
//!
//! Rendering is presentation only; every figure comes in pre-computed on the
//! result records.

pub mod pdf;
pub mod summary;
pub mod text;

use thiserror::Error;

/// Error types for report rendering.
#[derive(Error, Debug)]
pub enum ReportError {
    /// PDF document assembly failed.
    #[error("pdf rendering error: {0}")]
    Pdf(String),
}

/// Type alias for Result with ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
