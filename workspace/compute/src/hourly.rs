//! Hourly-rate calculator.
//!
//! Derives a monthly contract value from rate × hours/day × days/week ×
//! weeks/month, then applies the down-payment rule, a weekly installment
//! plan and the participant split.

use common::converters::{parse_count, parse_currency, parse_iso_date, parse_number};
use model::hourly::{HourlyScenarioInput, HourlyScenarioResult};
use model::participant::Participant;
use rust_decimal::Decimal;
use tracing::{instrument, warn};

use crate::error::{ComputeError, Result};
use crate::{
    CALCULATION_ERROR, DAYS_PER_WEEK, WEEKS_PER_MONTH, participant_shares, resolve_down_payment,
    schedule,
};

/// Calculates one hourly-rate scenario.
///
/// Total function: any required divisor ≤ 0 short-circuits to the all-zero
/// result (no error marker, matching the blank-form state); an internal fault
/// degrades to the zero result with the `error` marker set.
#[instrument(skip(participants))]
pub fn calculate(
    input: &HourlyScenarioInput,
    participants: &[Participant],
) -> HourlyScenarioResult {
    match try_calculate(input, participants) {
        Ok(result) => result,
        Err(err) => {
            warn!(scenario = input.id, %err, "hourly scenario degraded to zero result");
            let mut result = HourlyScenarioResult::empty(input.id);
            result.error = Some(CALCULATION_ERROR.to_string());
            result
        }
    }
}

fn try_calculate(
    input: &HourlyScenarioInput,
    participants: &[Participant],
) -> Result<HourlyScenarioResult> {
    let mut result = HourlyScenarioResult::empty(input.id);

    let hourly_rate = parse_currency(&input.hourly_rate);
    let hours_per_day = parse_number(&input.hours_per_day);
    let days_per_week = parse_number(&input.days_per_week);
    let weeks_per_month = match parse_number(&input.weeks_per_month) {
        weeks if weeks > Decimal::ZERO => weeks,
        _ => WEEKS_PER_MONTH,
    };

    // Division-by-zero guard: a blank or non-positive driver leaves the
    // scenario at its all-zero state.
    if hourly_rate <= Decimal::ZERO
        || hours_per_day <= Decimal::ZERO
        || days_per_week <= Decimal::ZERO
    {
        return Ok(result);
    }

    result.hourly_rate = hourly_rate;
    result.hours_per_month = hours_per_day * days_per_week * weeks_per_month;
    result.daily_value = hourly_rate * hours_per_day;
    result.weekly_value = result.daily_value * days_per_week;
    result.monthly_total = result.weekly_value * weeks_per_month;
    result.contract_total = result.monthly_total;

    let (down_value, down_percent) = resolve_down_payment(
        result.monthly_total,
        parse_currency(&input.down_payment_value),
        parse_number(&input.down_payment_percent),
    );
    result.down_payment_value = down_value;
    result.down_payment_percent = down_percent;
    result.financed_value = (result.monthly_total - down_value).max(Decimal::ZERO);

    let installments = parse_count(&input.weekly_installments);
    if installments > 0 {
        result.installment_count = installments;
        result.weekly_installment = result.financed_value / Decimal::from(installments);
        result.estimated_monthly = result.weekly_installment * WEEKS_PER_MONTH;
        result.average_daily = result.weekly_installment / DAYS_PER_WEEK;

        if !input.first_installment_date.trim().is_empty() {
            let start = parse_iso_date(&input.first_installment_date)
                .ok_or_else(|| ComputeError::InvalidDate(input.first_installment_date.clone()))?;

            result.installment_dates = schedule::weekly_dates(start, installments)?;
            result.first_installment_date = Some(start);
            result.last_installment_date = result.installment_dates.last().copied();
        }
    }

    result.participant_shares =
        participant_shares(participants, result.contract_total, result.estimated_monthly);

    Ok(result)
}
