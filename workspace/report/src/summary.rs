//! Short formatted summaries meant for the clipboard.

use common::converters::{format_currency, format_decimal_br};
use model::ai::{AiProjectResult, PAYBACK_SENTINEL};
use model::flat::FlatScenarioResult;

/// One-glance summary of an AI-project quote.
pub fn ai_proposal_summary(result: &AiProjectResult) -> String {
    let payback = if result.payback_months >= PAYBACK_SENTINEL {
        "indeterminado".to_string()
    } else {
        format!("{} meses", format_decimal_br(result.payback_months, 1))
    };
    format!(
        "Proposta Automação & IA\n\
         Setup: {} ({}h estimadas)\n\
         Recorrência mensal: {}\n\
         Payback estimado: {}",
        format_currency(result.final_setup_value),
        format_decimal_br(result.estimated_hours, 0),
        format_currency(result.final_monthly_value),
        payback
    )
}

/// One-glance summary of a flat-fee scenario.
pub fn flat_scenario_summary(result: &FlatScenarioResult) -> String {
    format!(
        "{}\n\
         Total: {} | Entrada: {} ({}%)\n\
         Financiado: {} em {}x de {}",
        result.name,
        format_currency(result.total_value),
        format_currency(result.down_payment_value),
        format_decimal_br(result.down_payment_percent, 2),
        format_currency(result.financed_value),
        result.installment_count,
        format_currency(result.monthly_installment)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::ai::SetupBreakdown;
    use rust_decimal::Decimal;

    fn result() -> AiProjectResult {
        AiProjectResult {
            estimated_hours: Decimal::from(60),
            base_setup_value: Decimal::from(12_500),
            complexity_markup: Decimal::from(3_750),
            urgency_markup: Decimal::ZERO,
            final_setup_value: Decimal::from(22_750),
            breakdown: SetupBreakdown {
                labor_value: Decimal::from(12_000),
                integration_value: Decimal::from(500),
                complexity_addon: Decimal::from(3_750),
                urgency_addon: Decimal::ZERO,
                ai_tech_addon: Decimal::ZERO,
                ip_transfer_addon: Decimal::ZERO,
                margin_addon: Decimal::from(6_500),
            },
            infra_cost: Decimal::from(150),
            token_cost: Decimal::from(90),
            whatsapp_cost: Decimal::ZERO,
            base_monthly_cost: Decimal::from(2_240),
            final_monthly_value: Decimal::from(3_360),
            payback_months: Decimal::new(34, 1),
            projected_annual_profit: Decimal::from(79_680),
        }
    }

    #[test]
    fn test_ai_summary_lines() {
        let summary = ai_proposal_summary(&result());
        assert!(summary.contains("Setup: R$22.750,00 (60h estimadas)"));
        assert!(summary.contains("Recorrência mensal: R$3.360,00"));
        assert!(summary.contains("Payback estimado: 3,4 meses"));
    }

    #[test]
    fn test_ai_summary_indeterminate_payback() {
        let mut quote = result();
        quote.payback_months = PAYBACK_SENTINEL;
        assert!(ai_proposal_summary(&quote).contains("Payback estimado: indeterminado"));
    }

    #[test]
    fn test_flat_summary() {
        let mut scenario = FlatScenarioResult::empty(1);
        scenario.total_value = Decimal::from(10_000);
        scenario.down_payment_value = Decimal::from(1_000);
        scenario.down_payment_percent = Decimal::from(10);
        scenario.financed_value = Decimal::from(9_000);
        scenario.installment_count = 4;
        scenario.monthly_installment = Decimal::from(2_250);

        let summary = flat_scenario_summary(&scenario);
        assert!(summary.starts_with("Cenário 1"));
        assert!(summary.contains("Financiado: R$9.000,00 em 4x de R$2.250,00"));
    }
}
