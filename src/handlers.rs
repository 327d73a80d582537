pub mod ai_project;
pub mod flat;
pub mod health;
pub mod hourly;
pub mod reports;
