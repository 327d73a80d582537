//! Pure calculation engine for the three pricing calculators.
//!
//! Every public `calculate` function is a total function of its input record:
//! unusable numeric fields coerce to zero or a documented default, internal
//! faults degrade to a zero-valued result carrying an `error` marker, and no
//! call ever panics or returns `Err` to the caller. Re-invoking with identical
//! inputs yields identical results.

pub mod ai_project;
pub mod error;
pub mod flat;
pub mod hourly;
pub mod schedule;
pub mod tokens;

use model::participant::{Participant, ParticipantShare};
use rust_decimal::Decimal;

/// Average number of calendar weeks in a month, used by every weekly
/// projection (52.14 weeks / 12).
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4345, 0, 0, false, 3);

/// Marker stored on a result when a scenario fails mid-calculation.
pub const CALCULATION_ERROR: &str = "calculation error";

pub(crate) const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Resolves the down payment from the two optional form fields.
///
/// An absolute currency amount always wins; the percentage is then recomputed
/// from it. Only when no amount is given does the percentage field determine
/// the value. Returns `(value, percent)`; both zero when neither is supplied.
/// `total` must be positive.
pub(crate) fn resolve_down_payment(
    total: Decimal,
    value_input: Decimal,
    percent_input: Decimal,
) -> (Decimal, Decimal) {
    if value_input > Decimal::ZERO {
        (value_input, value_input / total * Decimal::ONE_HUNDRED)
    } else if percent_input > Decimal::ZERO {
        (total * percent_input / Decimal::ONE_HUNDRED, percent_input)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    }
}

/// Proportional split of a scenario across its participants.
///
/// share = figure × percentage / 100, for both the contract total and the
/// monthly figure the scenario reports.
pub(crate) fn participant_shares(
    participants: &[Participant],
    total: Decimal,
    monthly: Decimal,
) -> Vec<ParticipantShare> {
    participants
        .iter()
        .map(|p| ParticipantShare {
            name: p.name.clone(),
            percentage: p.percentage,
            share_of_total: total * p.percentage / Decimal::ONE_HUNDRED,
            share_of_monthly: monthly * p.percentage / Decimal::ONE_HUNDRED,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str, percentage: i64) -> Participant {
        Participant {
            id: 1,
            name: name.to_string(),
            percentage: Decimal::from(percentage),
        }
    }

    #[test]
    fn test_down_payment_currency_wins_over_percent() {
        let total = Decimal::from(10_000);
        // Both fields filled: the absolute amount decides, the percentage is
        // recomputed from it rather than the other way around.
        let (value, percent) =
            resolve_down_payment(total, Decimal::from(2_000), Decimal::from(50));
        assert_eq!(value, Decimal::from(2_000));
        assert_eq!(percent, Decimal::from(20));
    }

    #[test]
    fn test_down_payment_percent_alone() {
        let total = Decimal::from(10_000);
        let (value, percent) = resolve_down_payment(total, Decimal::ZERO, Decimal::from(25));
        assert_eq!(value, Decimal::from(2_500));
        assert_eq!(percent, Decimal::from(25));
    }

    #[test]
    fn test_down_payment_absent() {
        let (value, percent) =
            resolve_down_payment(Decimal::from(10_000), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(value, Decimal::ZERO);
        assert_eq!(percent, Decimal::ZERO);
    }

    #[test]
    fn test_shares_partition_total_at_one_hundred_percent() {
        let participants = vec![participant("A", 70), participant("B", 30)];
        let total = Decimal::from(9_000);
        let monthly = Decimal::from(2_250);

        let shares = participant_shares(&participants, total, monthly);
        let sum_total: Decimal = shares.iter().map(|s| s.share_of_total).sum();
        let sum_monthly: Decimal = shares.iter().map(|s| s.share_of_monthly).sum();

        assert_eq!(sum_total, total);
        assert_eq!(sum_monthly, monthly);
        assert_eq!(shares[0].share_of_total, Decimal::from(6_300));
        assert_eq!(shares[1].share_of_monthly, Decimal::from(675));
    }

    #[test]
    fn test_shares_scale_with_percentage_sum() {
        // Percentages are not forced to sum to 100; shares simply scale.
        let participants = vec![participant("A", 40), participant("B", 40)];
        let total = Decimal::from(1_000);

        let shares = participant_shares(&participants, total, Decimal::ZERO);
        let sum: Decimal = shares.iter().map(|s| s.share_of_total).sum();
        assert_eq!(sum, Decimal::from(800));
    }
}
