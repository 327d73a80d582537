use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::participant::ParticipantShare;

/// Raw form fields of one flat-fee pricing scenario.
///
/// Currency and number fields keep the localized text exactly as typed
/// ("R$ 1.234,56", "12"); parsing happens inside the calculator so that an
/// invalid field degrades to zero instead of rejecting the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FlatScenarioInput {
    /// Locally-unique id (1..=10) assigned by the client
    pub id: i32,
    /// Total project value, localized currency text
    #[serde(default)]
    pub total_value: String,
    /// Down payment as an absolute currency amount; wins over the percentage
    #[serde(default)]
    pub down_payment_value: String,
    /// Down payment as a percentage of the total
    #[serde(default)]
    pub down_payment_percent: String,
    /// Number of monthly installments
    #[serde(default)]
    pub installments: String,
    /// First installment date, ISO `YYYY-MM-DD`, empty for no schedule
    #[serde(default)]
    pub first_installment_date: String,
}

/// Computed snapshot of a flat-fee scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FlatScenarioResult {
    pub id: i32,
    /// Display label ("Cenário N")
    pub name: String,
    pub total_value: Decimal,
    pub down_payment_value: Decimal,
    pub down_payment_percent: Decimal,
    /// `max(0, total - down payment)`
    pub financed_value: Decimal,
    pub installment_count: u32,
    pub monthly_installment: Decimal,
    /// Weekly projection of the monthly installment
    pub weekly_installment: Decimal,
    pub daily_value: Decimal,
    /// Installments expressed in average calendar weeks
    pub total_weeks: Decimal,
    pub contract_total: Decimal,
    pub participant_shares: Vec<ParticipantShare>,
    pub first_installment_date: Option<NaiveDate>,
    pub last_monthly_date: Option<NaiveDate>,
    /// One date per installment, one calendar month apart
    pub monthly_dates: Vec<NaiveDate>,
    /// Seven-day cadence covering the same period
    pub weekly_dates: Vec<NaiveDate>,
    /// Generic marker set when the scenario failed mid-calculation
    pub error: Option<String>,
}

impl FlatScenarioResult {
    /// All-zero result every calculation starts from; also what a failed
    /// scenario degrades to.
    pub fn empty(id: i32) -> Self {
        Self {
            id,
            name: format!("Cenário {id}"),
            total_value: Decimal::ZERO,
            down_payment_value: Decimal::ZERO,
            down_payment_percent: Decimal::ZERO,
            financed_value: Decimal::ZERO,
            installment_count: 0,
            monthly_installment: Decimal::ZERO,
            weekly_installment: Decimal::ZERO,
            daily_value: Decimal::ZERO,
            total_weeks: Decimal::ZERO,
            contract_total: Decimal::ZERO,
            participant_shares: Vec::new(),
            first_installment_date: None,
            last_monthly_date: None,
            monthly_dates: Vec::new(),
            weekly_dates: Vec::new(),
            error: None,
        }
    }
}
