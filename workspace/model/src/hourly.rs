use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::participant::ParticipantShare;

/// Raw form fields of one hourly-rate pricing scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HourlyScenarioInput {
    /// Locally-unique id (1..=10) assigned by the client
    pub id: i32,
    /// Rate per hour, localized currency text
    #[serde(default)]
    pub hourly_rate: String,
    #[serde(default)]
    pub hours_per_day: String,
    #[serde(default)]
    pub days_per_week: String,
    /// Weeks per month; blank or unusable falls back to the 4.345 average
    #[serde(default)]
    pub weeks_per_month: String,
    /// Down payment as an absolute currency amount; wins over the percentage
    #[serde(default)]
    pub down_payment_value: String,
    /// Down payment as a percentage of the monthly total
    #[serde(default)]
    pub down_payment_percent: String,
    /// Number of weekly installments
    #[serde(default)]
    pub weekly_installments: String,
    /// First installment date, ISO `YYYY-MM-DD`, empty for no schedule
    #[serde(default)]
    pub first_installment_date: String,
}

/// Computed snapshot of an hourly-rate scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HourlyScenarioResult {
    pub id: i32,
    /// Display label ("Cenário N")
    pub name: String,
    /// Rate per hour actually used
    pub hourly_rate: Decimal,
    pub hours_per_month: Decimal,
    pub daily_value: Decimal,
    pub weekly_value: Decimal,
    /// rate × hours/day × days/week × weeks/month
    pub monthly_total: Decimal,
    pub down_payment_value: Decimal,
    pub down_payment_percent: Decimal,
    /// `max(0, monthly total - down payment)`
    pub financed_value: Decimal,
    /// One month of work
    pub contract_total: Decimal,
    pub installment_count: u32,
    pub weekly_installment: Decimal,
    /// Weekly installment projected back to a month (× 4.345)
    pub estimated_monthly: Decimal,
    /// Weekly installment / 7
    pub average_daily: Decimal,
    pub participant_shares: Vec<ParticipantShare>,
    pub first_installment_date: Option<NaiveDate>,
    pub last_installment_date: Option<NaiveDate>,
    /// One date per installment, seven days apart
    pub installment_dates: Vec<NaiveDate>,
    /// Generic marker set when the scenario failed mid-calculation
    pub error: Option<String>,
}

impl HourlyScenarioResult {
    /// All-zero result every calculation starts from; also what a failed
    /// scenario degrades to.
    pub fn empty(id: i32) -> Self {
        Self {
            id,
            name: format!("Cenário {id}"),
            hourly_rate: Decimal::ZERO,
            hours_per_month: Decimal::ZERO,
            daily_value: Decimal::ZERO,
            weekly_value: Decimal::ZERO,
            monthly_total: Decimal::ZERO,
            down_payment_value: Decimal::ZERO,
            down_payment_percent: Decimal::ZERO,
            financed_value: Decimal::ZERO,
            contract_total: Decimal::ZERO,
            installment_count: 0,
            weekly_installment: Decimal::ZERO,
            estimated_monthly: Decimal::ZERO,
            average_daily: Decimal::ZERO,
            participant_shares: Vec::new(),
            first_installment_date: None,
            last_installment_date: None,
            installment_dates: Vec::new(),
            error: None,
        }
    }
}
