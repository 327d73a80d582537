//! Domain records for the pricing calculators.
//!
//! Inputs mirror the raw form fields a client submits (currency and number
//! fields arrive as localized text), results are the immutable snapshots the
//! calculators derive from them. Nothing in here is persisted.

pub mod ai;
pub mod flat;
pub mod hourly;
pub mod participant;

pub use ai::{
    AiProjectInput, AiProjectResult, ComplexityLevel, HostingTier, LlmModel, PAYBACK_SENTINEL,
    SetupBreakdown,
};
pub use flat::{FlatScenarioInput, FlatScenarioResult};
pub use hourly::{HourlyScenarioInput, HourlyScenarioResult};
pub use participant::{Participant, ParticipantShare};
