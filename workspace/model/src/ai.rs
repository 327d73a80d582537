use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value reported in `payback_months` when savings never offset the setup
/// investment, standing in for "indeterminate / very large".
pub const PAYBACK_SENTINEL: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

/// Logical complexity of the automation workflows.
///
/// Drives both the hours estimate and the setup markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "low",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::High => "high",
        }
    }
}

/// LLM powering the automation; selects the per-1k-token rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LlmModel {
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "claude-3-5")]
    Claude35,
    #[serde(rename = "gemini-pro")]
    GeminiPro,
}

impl LlmModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmModel::Gpt4o => "gpt-4o",
            LlmModel::Claude35 => "claude-3-5",
            LlmModel::GeminiPro => "gemini-pro",
        }
    }
}

/// Where the automation stack runs; selects the fixed infrastructure cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum HostingTier {
    #[serde(rename = "self-hosted")]
    SelfHosted,
    #[serde(rename = "cloud")]
    Cloud,
}

impl HostingTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostingTier::SelfHosted => "self-hosted",
            HostingTier::Cloud => "cloud",
        }
    }
}

/// Parameters of one AI-automation project quote.
///
/// Unlike the scenario calculators this page edits typed values directly, so
/// money fields are already `Decimal` rather than localized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AiProjectInput {
    /// Automation workflows in scope
    pub workflow_count: u32,
    /// Integration nodes in scope (informational, shown on the proposal)
    #[serde(default)]
    pub integration_count: u32,
    pub complexity: ComplexityLevel,
    pub model: LlmModel,
    /// RAG / knowledge base layer
    #[serde(default)]
    pub has_rag: bool,
    /// Persistent (vector) memory
    #[serde(default)]
    pub has_memory: bool,
    pub hosting: HostingTier,
    /// Estimated tokens consumed per month
    pub estimated_tokens: u64,
    /// Official WhatsApp (Meta) channel enabled
    #[serde(default)]
    pub has_whatsapp: bool,
    #[serde(default)]
    pub whatsapp_service_conversations: u32,
    #[serde(default)]
    pub whatsapp_marketing_conversations: u32,
    #[serde(default)]
    pub is_urgent: bool,
    /// Source-code / IP transfer to the client
    #[serde(default)]
    pub has_ip_transfer: bool,
    /// Rate per hour (R$)
    pub hourly_rate: Decimal,
    /// Fixed integration cost (licenses etc.)
    pub integration_cost: Decimal,
    /// Flat monthly support fee
    pub support_fee: Decimal,
    /// Estimated monthly savings/revenue used for the ROI projection
    #[serde(default)]
    pub monthly_savings: Decimal,
    /// Margin applied on top of the marked-up setup value, in percent
    pub setup_margin_percent: Decimal,
    /// Margin applied on top of the recurring base cost, in percent
    pub recurring_margin_percent: Decimal,
}

/// Monetary decomposition of the setup price.
///
/// Addends reconcile exactly: hours + integrations scaled by the markups plus
/// `margin_addon` equals the final setup value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SetupBreakdown {
    /// Labor (estimated hours × rate)
    pub labor_value: Decimal,
    /// Fixed integration cost
    pub integration_value: Decimal,
    pub complexity_addon: Decimal,
    pub urgency_addon: Decimal,
    /// RAG + persistent memory addends combined
    pub ai_tech_addon: Decimal,
    pub ip_transfer_addon: Decimal,
    pub margin_addon: Decimal,
}

/// Computed snapshot of one AI-project quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AiProjectResult {
    /// Estimated implementation hours, rounded up
    pub estimated_hours: Decimal,
    /// Labor + integration cost, before any markup
    pub base_setup_value: Decimal,
    /// Complexity + AI-tech + IP addends combined
    pub complexity_markup: Decimal,
    pub urgency_markup: Decimal,
    pub final_setup_value: Decimal,
    pub breakdown: SetupBreakdown,
    /// Fixed hosting cost for the selected tier
    pub infra_cost: Decimal,
    /// Token consumption cost for the selected model
    pub token_cost: Decimal,
    /// Meta conversation cost, zero when the channel is disabled
    pub whatsapp_cost: Decimal,
    /// Infra + tokens + WhatsApp + support fee, before margin
    pub base_monthly_cost: Decimal,
    pub final_monthly_value: Decimal,
    /// Months until savings offset the setup; 999 when indeterminate
    pub payback_months: Decimal,
    /// Net monthly benefit × 12; negative for a projected loss
    pub projected_annual_profit: Decimal,
}
