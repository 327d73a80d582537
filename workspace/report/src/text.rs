//! Fixed-format plain-text scenario reports offered as file downloads.
//!
//! Output is Brazilian-Portuguese product copy: overview, payment,
//! installment plan, schedule and profit split, one labelled line each.

use common::converters::{format_currency, format_date_br, format_decimal_br};
use model::flat::FlatScenarioResult;
use model::hourly::HourlyScenarioResult;
use model::participant::ParticipantShare;

const RULE: &str = "===============================";

/// Renders the report for one hourly-rate scenario.
pub fn hourly_scenario_report(result: &HourlyScenarioResult) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(RULE.to_string());
    lines.push(format!("   RELATÓRIO - {}", result.name.to_uppercase()));
    lines.push("   SIMULADOR DE PRECIFICAÇÃO POR HORA".to_string());
    lines.push(RULE.to_string());
    lines.push(String::new());

    lines.push("--- VISÃO GERAL ---".to_string());
    lines.push(format!(
        "Valor por hora: {}",
        format_currency(result.hourly_rate)
    ));
    lines.push(format!(
        "Horas no mês: {}h",
        format_decimal_br(result.hours_per_month, 1)
    ));
    lines.push(format!(
        "Valor por dia: {}",
        format_currency(result.daily_value)
    ));
    lines.push(format!(
        "Valor semanal: {}",
        format_currency(result.weekly_value)
    ));
    lines.push(format!(
        "Valor mensal total: {}",
        format_currency(result.monthly_total)
    ));
    lines.push(String::new());

    lines.push("--- PAGAMENTO ---".to_string());
    lines.push(format!(
        "Entrada: {} ({}%)",
        format_currency(result.down_payment_value),
        format_decimal_br(result.down_payment_percent, 2)
    ));
    lines.push(format!(
        "Valor financiado: {}",
        format_currency(result.financed_value)
    ));
    lines.push(format!(
        "Total do contrato: {}",
        format_currency(result.contract_total)
    ));
    lines.push(String::new());

    lines.push("--- PARCELAMENTO SEMANAL ---".to_string());
    lines.push(format!("Número de parcelas: {}x", result.installment_count));
    lines.push(format!(
        "Valor da parcela semanal: {}",
        format_currency(result.weekly_installment)
    ));
    lines.push(format!(
        "Valor mensal estimado: {}",
        format_currency(result.estimated_monthly)
    ));
    lines.push(format!(
        "Valor diário médio: {}",
        format_currency(result.average_daily)
    ));
    lines.push(String::new());

    lines.push("--- CRONOGRAMA ---".to_string());
    lines.push(format!(
        "Data primeira parcela: {}",
        result
            .first_installment_date
            .map(format_date_br)
            .unwrap_or_default()
    ));
    lines.push(format!(
        "Data última parcela: {}",
        result
            .last_installment_date
            .map(format_date_br)
            .unwrap_or_default()
    ));
    lines.push(String::new());

    lines.push("Datas das parcelas semanais:".to_string());
    for (index, date) in result.installment_dates.iter().enumerate() {
        lines.push(format!("  {}ª parcela: {}", index + 1, format_date_br(*date)));
    }

    push_shares_section(&mut lines, &result.participant_shares);

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push("Gerado pelo simulador de precificação".to_string());
    lines.push(RULE.to_string());

    lines.join("\n")
}

/// Renders the report for one flat-fee scenario.
pub fn flat_scenario_report(result: &FlatScenarioResult) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(RULE.to_string());
    lines.push(format!("   RELATÓRIO - {}", result.name.to_uppercase()));
    lines.push("   SIMULADOR DE PRECIFICAÇÃO DE PROJETO".to_string());
    lines.push(RULE.to_string());
    lines.push(String::new());

    lines.push("--- VISÃO GERAL ---".to_string());
    lines.push(format!(
        "Valor total do projeto: {}",
        format_currency(result.total_value)
    ));
    lines.push(format!(
        "Total do contrato: {}",
        format_currency(result.contract_total)
    ));
    lines.push(String::new());

    lines.push("--- PAGAMENTO ---".to_string());
    lines.push(format!(
        "Entrada: {} ({}%)",
        format_currency(result.down_payment_value),
        format_decimal_br(result.down_payment_percent, 2)
    ));
    lines.push(format!(
        "Valor financiado: {}",
        format_currency(result.financed_value)
    ));
    lines.push(String::new());

    lines.push("--- PARCELAMENTO ---".to_string());
    lines.push(format!("Número de parcelas: {}x", result.installment_count));
    lines.push(format!(
        "Valor da parcela mensal: {}",
        format_currency(result.monthly_installment)
    ));
    lines.push(format!(
        "Projeção semanal: {}",
        format_currency(result.weekly_installment)
    ));
    lines.push(format!(
        "Valor diário: {}",
        format_currency(result.daily_value)
    ));
    lines.push(format!(
        "Total de semanas: {}",
        format_decimal_br(result.total_weeks, 1)
    ));
    lines.push(String::new());

    lines.push("--- CRONOGRAMA ---".to_string());
    lines.push(format!(
        "Data primeira parcela: {}",
        result
            .first_installment_date
            .map(format_date_br)
            .unwrap_or_default()
    ));
    lines.push(format!(
        "Data última parcela mensal: {}",
        result
            .last_monthly_date
            .map(format_date_br)
            .unwrap_or_default()
    ));
    lines.push(String::new());

    lines.push("Datas das parcelas mensais:".to_string());
    for (index, date) in result.monthly_dates.iter().enumerate() {
        lines.push(format!("  {}ª parcela: {}", index + 1, format_date_br(*date)));
    }

    push_shares_section(&mut lines, &result.participant_shares);

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push("Gerado pelo simulador de precificação".to_string());
    lines.push(RULE.to_string());

    lines.join("\n")
}

fn push_shares_section(lines: &mut Vec<String>, shares: &[ParticipantShare]) {
    if shares.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push("--- DIVISÃO DE LUCROS ---".to_string());
    for share in shares {
        lines.push(format!(
            "{} ({}%): {} no total / {} por mês",
            share.name,
            format_decimal_br(share.percentage, 0),
            format_currency(share.share_of_total),
            format_currency(share.share_of_monthly)
        ));
    }
}
