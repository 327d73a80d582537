//! AI-automation project calculator.
//!
//! One-time setup price (labor + integrations + markups + margin), monthly
//! recurring price (infrastructure + token consumption + messaging channel +
//! support + margin) and the ROI/payback projection.

use model::ai::{
    AiProjectInput, AiProjectResult, ComplexityLevel, HostingTier, LlmModel, PAYBACK_SENTINEL,
    SetupBreakdown,
};
use rust_decimal::Decimal;
use tracing::instrument;

/// Base implementation hours per workflow before the complexity factor.
const BASE_HOURS_PER_WORKFLOW: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Hours multiplier per complexity level (8h / 12h / 20h per workflow).
fn complexity_hours_factor(complexity: ComplexityLevel) -> Decimal {
    match complexity {
        ComplexityLevel::Low => Decimal::ONE,
        ComplexityLevel::Medium => Decimal::new(15, 1),
        ComplexityLevel::High => Decimal::new(25, 1),
    }
}

/// Setup markup fraction per complexity level.
fn complexity_markup(complexity: ComplexityLevel) -> Decimal {
    match complexity {
        ComplexityLevel::Low => Decimal::ZERO,
        ComplexityLevel::Medium => Decimal::new(30, 2),
        ComplexityLevel::High => Decimal::new(60, 2),
    }
}

/// Fixed monthly infrastructure cost per hosting tier (basic VPS vs managed
/// cloud starter).
fn hosting_cost(hosting: HostingTier) -> Decimal {
    match hosting {
        HostingTier::SelfHosted => Decimal::new(50, 0),
        HostingTier::Cloud => Decimal::new(150, 0),
    }
}

/// Cost per 1k tokens in BRL (blended input/output USD rate × 6.0).
fn token_rate_per_1k(model: LlmModel) -> Decimal {
    match model {
        LlmModel::Gpt4o | LlmModel::Claude35 => Decimal::new(9, 2),
        LlmModel::GeminiPro => Decimal::new(3, 2),
    }
}

/// Meta (WhatsApp) per-conversation rates in BRL (USD × 6.0).
fn meta_service_rate() -> Decimal {
    Decimal::new(18, 2)
}

fn meta_marketing_rate() -> Decimal {
    Decimal::new(36, 2)
}

fn urgency_fraction(is_urgent: bool) -> Decimal {
    if is_urgent { Decimal::new(25, 2) } else { Decimal::ZERO }
}

fn rag_fraction(has_rag: bool) -> Decimal {
    if has_rag { Decimal::new(15, 2) } else { Decimal::ZERO }
}

fn memory_fraction(has_memory: bool) -> Decimal {
    if has_memory { Decimal::new(10, 2) } else { Decimal::ZERO }
}

fn ip_transfer_fraction(has_ip_transfer: bool) -> Decimal {
    if has_ip_transfer { Decimal::new(30, 2) } else { Decimal::ZERO }
}

/// Calculates an AI-project quote.
///
/// Pure and total: every edge case (zero savings, zero tokens, no channel)
/// maps to a defined zero or sentinel value.
#[instrument]
pub fn calculate(input: &AiProjectInput) -> AiProjectResult {
    // Hours estimate; the unrounded figure drives the cost, the rounded-up
    // one is what the proposal shows.
    let raw_hours = Decimal::from(input.workflow_count)
        * BASE_HOURS_PER_WORKFLOW
        * complexity_hours_factor(input.complexity);

    let labor_value = raw_hours * input.hourly_rate;
    let base_setup_value = labor_value + input.integration_cost;

    // Markup fractions, each independently toggled, all applied on the base.
    let complexity_fraction = complexity_markup(input.complexity);
    let urgency_fraction = urgency_fraction(input.is_urgent);
    let rag_fraction = rag_fraction(input.has_rag);
    let memory_fraction = memory_fraction(input.has_memory);
    let ip_fraction = ip_transfer_fraction(input.has_ip_transfer);

    let markup_sum =
        complexity_fraction + urgency_fraction + rag_fraction + memory_fraction + ip_fraction;

    let complexity_addon = base_setup_value * complexity_fraction;
    let urgency_addon = base_setup_value * urgency_fraction;
    let ai_tech_addon = base_setup_value * (rag_fraction + memory_fraction);
    let ip_transfer_addon = base_setup_value * ip_fraction;

    let pre_margin_setup = base_setup_value * (Decimal::ONE + markup_sum);
    let margin_addon = pre_margin_setup * input.setup_margin_percent / Decimal::ONE_HUNDRED;
    let final_setup_value = pre_margin_setup + margin_addon;

    // Recurring side.
    let infra_cost = hosting_cost(input.hosting);
    let token_cost =
        Decimal::from(input.estimated_tokens) / Decimal::ONE_THOUSAND * token_rate_per_1k(input.model);
    let whatsapp_cost = if input.has_whatsapp {
        Decimal::from(input.whatsapp_service_conversations) * meta_service_rate()
            + Decimal::from(input.whatsapp_marketing_conversations) * meta_marketing_rate()
    } else {
        Decimal::ZERO
    };

    let base_monthly_cost = infra_cost + token_cost + whatsapp_cost + input.support_fee;
    let final_monthly_value =
        base_monthly_cost * (Decimal::ONE + input.recurring_margin_percent / Decimal::ONE_HUNDRED);

    // ROI projection. Payback is only meaningful when the client actually
    // nets a monthly benefit; otherwise the sentinel stands in for
    // "indeterminate" and the annual figure shows the projected loss.
    let net_monthly_benefit = input.monthly_savings - final_monthly_value;
    let payback_months = if net_monthly_benefit > Decimal::ZERO {
        final_setup_value / net_monthly_benefit
    } else {
        PAYBACK_SENTINEL
    };
    let projected_annual_profit = net_monthly_benefit * MONTHS_PER_YEAR;

    AiProjectResult {
        estimated_hours: raw_hours.ceil(),
        base_setup_value,
        complexity_markup: complexity_addon + ai_tech_addon + ip_transfer_addon,
        urgency_markup: urgency_addon,
        final_setup_value,
        breakdown: SetupBreakdown {
            labor_value,
            integration_value: input.integration_cost,
            complexity_addon,
            urgency_addon,
            ai_tech_addon,
            ip_transfer_addon,
            margin_addon,
        },
        infra_cost,
        token_cost,
        whatsapp_cost,
        base_monthly_cost,
        final_monthly_value,
        payback_months,
        projected_annual_profit,
    }
}
