use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stakeholder entitled to a cut of a contract.
///
/// Percentages are not required to sum to 100 across a list; callers surface
/// a non-blocking warning when they do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    /// Locally-unique id assigned by the client
    pub id: i32,
    /// Display name
    pub name: String,
    /// Share of the contract, in percent
    pub percentage: Decimal,
}

/// A participant's computed cut of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantShare {
    pub name: String,
    pub percentage: Decimal,
    /// Cut of the contract total
    pub share_of_total: Decimal,
    /// Cut of the monthly figure the scenario reports
    pub share_of_monthly: Decimal,
}
