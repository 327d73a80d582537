pub mod ai_pdf;
pub mod serve;
pub mod text_report;

pub use ai_pdf::export_ai_pdf;
pub use serve::serve;
pub use text_report::{TextReportKind, export_text_report};
