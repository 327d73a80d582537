//! Flat-fee project calculator.
//!
//! Prices a fixed-value contract: down payment, monthly installment plan with
//! a weekly-cadence projection, installment date schedule and participant
//! split.

use common::converters::{parse_count, parse_currency, parse_iso_date, parse_number};
use model::flat::{FlatScenarioInput, FlatScenarioResult};
use model::participant::Participant;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{instrument, warn};

use crate::error::{ComputeError, Result};
use crate::{
    CALCULATION_ERROR, DAYS_PER_WEEK, WEEKS_PER_MONTH, participant_shares, resolve_down_payment,
    schedule,
};

/// Calculates one flat-fee scenario.
///
/// `global_total` is the request-level default project value, applied when the
/// scenario's own field is blank or unusable. Total function: a scenario that
/// cannot be priced comes back zero-valued with the `error` marker set, never
/// as an `Err`.
#[instrument(skip(participants))]
pub fn calculate(
    input: &FlatScenarioInput,
    participants: &[Participant],
    global_total: Option<Decimal>,
) -> FlatScenarioResult {
    match try_calculate(input, participants, global_total) {
        Ok(result) => result,
        Err(err) => {
            warn!(scenario = input.id, %err, "flat scenario degraded to zero result");
            let mut result = FlatScenarioResult::empty(input.id);
            result.error = Some(CALCULATION_ERROR.to_string());
            result
        }
    }
}

fn try_calculate(
    input: &FlatScenarioInput,
    participants: &[Participant],
    global_total: Option<Decimal>,
) -> Result<FlatScenarioResult> {
    let mut result = FlatScenarioResult::empty(input.id);

    let mut total = parse_currency(&input.total_value);
    if total <= Decimal::ZERO {
        total = global_total.unwrap_or(Decimal::ZERO);
    }
    if total <= Decimal::ZERO {
        return Err(ComputeError::InvalidAmount("total project value".into()));
    }

    let (down_value, down_percent) = resolve_down_payment(
        total,
        parse_currency(&input.down_payment_value),
        parse_number(&input.down_payment_percent),
    );

    result.total_value = total;
    result.contract_total = total;
    result.down_payment_value = down_value;
    result.down_payment_percent = down_percent;
    result.financed_value = (total - down_value).max(Decimal::ZERO);

    let installments = parse_count(&input.installments);
    if installments > 0 {
        result.installment_count = installments;
        result.monthly_installment = result.financed_value / Decimal::from(installments);
        result.weekly_installment = result.monthly_installment / WEEKS_PER_MONTH;
        result.daily_value = result.weekly_installment / DAYS_PER_WEEK;
        result.total_weeks = Decimal::from(installments) * WEEKS_PER_MONTH;

        if !input.first_installment_date.trim().is_empty() {
            let start = parse_iso_date(&input.first_installment_date)
                .ok_or_else(|| ComputeError::InvalidDate(input.first_installment_date.clone()))?;
            let weeks = result.total_weeks.ceil().to_u32().unwrap_or(0);

            result.monthly_dates = schedule::monthly_dates(start, installments)?;
            result.weekly_dates = schedule::weekly_dates(start, weeks)?;
            result.first_installment_date = Some(start);
            result.last_monthly_date = result.monthly_dates.last().copied();
        }
    }

    result.participant_shares = participant_shares(participants, total, result.monthly_installment);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input(id: i32) -> FlatScenarioInput {
        FlatScenarioInput {
            id,
            total_value: String::new(),
            down_payment_value: String::new(),
            down_payment_percent: String::new(),
            installments: String::new(),
            first_installment_date: String::new(),
        }
    }

    fn participant(name: &str, percentage: i64) -> Participant {
        Participant {
            id: 1,
            name: name.to_string(),
            percentage: Decimal::from(percentage),
        }
    }

    #[test]
    fn test_full_scenario() {
        let scenario = FlatScenarioInput {
            total_value: "R$ 10.000,00".into(),
            down_payment_value: "R$ 1.000,00".into(),
            installments: "4".into(),
            first_installment_date: "2026-01-15".into(),
            ..input(1)
        };
        let participants = vec![participant("A", 70), participant("B", 30)];

        let result = calculate(&scenario, &participants, None);

        assert!(result.error.is_none());
        assert_eq!(result.total_value, Decimal::from(10_000));
        assert_eq!(result.down_payment_value, Decimal::from(1_000));
        assert_eq!(result.down_payment_percent, Decimal::from(10));
        assert_eq!(result.financed_value, Decimal::from(9_000));
        assert_eq!(result.monthly_installment, Decimal::from(2_250));
        assert_eq!(result.monthly_dates.len(), 4);
        assert_eq!(
            result.monthly_dates[3],
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
        );
        assert_eq!(
            result.last_monthly_date,
            Some(NaiveDate::from_ymd_opt(2026, 4, 15).unwrap())
        );
        // 4 × 4.345 weeks, rounded up for the weekly cadence
        assert_eq!(result.weekly_dates.len(), 18);
        assert_eq!(result.participant_shares.len(), 2);
        assert_eq!(
            result.participant_shares[0].share_of_total,
            Decimal::from(7_000)
        );
    }

    #[test]
    fn test_financed_value_never_negative() {
        let scenario = FlatScenarioInput {
            total_value: "R$ 1.000,00".into(),
            down_payment_value: "R$ 2.500,00".into(),
            installments: "2".into(),
            ..input(1)
        };

        let result = calculate(&scenario, &[], None);
        assert_eq!(result.financed_value, Decimal::ZERO);
        assert_eq!(result.monthly_installment, Decimal::ZERO);
    }

    #[test]
    fn test_currency_down_payment_wins_over_percent() {
        let scenario = FlatScenarioInput {
            total_value: "R$ 10.000,00".into(),
            down_payment_value: "R$ 2.000,00".into(),
            down_payment_percent: "50".into(),
            ..input(1)
        };

        let result = calculate(&scenario, &[], None);
        assert_eq!(result.down_payment_value, Decimal::from(2_000));
        assert_eq!(result.down_payment_percent, Decimal::from(20));
    }

    #[test]
    fn test_invalid_total_sets_error_marker() {
        let result = calculate(&input(3), &[], None);
        assert_eq!(result.error.as_deref(), Some(CALCULATION_ERROR));
        assert_eq!(result.total_value, Decimal::ZERO);
        assert_eq!(result.financed_value, Decimal::ZERO);
        assert_eq!(result.id, 3);
    }

    #[test]
    fn test_global_total_fills_blank_scenario() {
        let scenario = FlatScenarioInput {
            installments: "2".into(),
            ..input(1)
        };

        let result = calculate(&scenario, &[], Some(Decimal::from(5_000)));
        assert!(result.error.is_none());
        assert_eq!(result.total_value, Decimal::from(5_000));
        assert_eq!(result.monthly_installment, Decimal::from(2_500));
    }

    #[test]
    fn test_unparsable_date_sets_error_marker() {
        let scenario = FlatScenarioInput {
            total_value: "R$ 1.000,00".into(),
            installments: "2".into(),
            first_installment_date: "15/01/2026".into(),
            ..input(1)
        };

        let result = calculate(&scenario, &[], None);
        assert_eq!(result.error.as_deref(), Some(CALCULATION_ERROR));
        assert_eq!(result.total_value, Decimal::ZERO);
    }

    #[test]
    fn test_no_schedule_without_date() {
        let scenario = FlatScenarioInput {
            total_value: "R$ 1.000,00".into(),
            installments: "3".into(),
            ..input(1)
        };

        let result = calculate(&scenario, &[], None);
        assert!(result.error.is_none());
        assert!(result.monthly_dates.is_empty());
        assert!(result.first_installment_date.is_none());
        // the installment math still runs
        assert_eq!(result.installment_count, 3);
    }

    #[test]
    fn test_idempotent() {
        let scenario = FlatScenarioInput {
            total_value: "R$ 7.777,77".into(),
            down_payment_percent: "30".into(),
            installments: "6".into(),
            first_installment_date: "2026-03-01".into(),
            ..input(2)
        };
        let participants = vec![participant("A", 100)];

        let first = calculate(&scenario, &participants, None);
        let second = calculate(&scenario, &participants, None);
        assert_eq!(first, second);
    }
}
