//! AI-project proposal PDF.
//!
//! Single A4 page assembled with printpdf built-in fonts: header band, scope
//! table, setup and recurring cost breakdowns, an ROI highlight when a
//! savings estimate is present, signature line and footer disclaimer.

use chrono::NaiveDateTime;
use common::converters::{format_currency, format_decimal_br, format_integer_br};
use model::ai::{AiProjectInput, AiProjectResult, PAYBACK_SENTINEL};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    Rgb,
};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::{ReportError, Result};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const VALUE_COLUMN: f32 = 150.0;

fn dark_blue() -> Color {
    Color::Rgb(Rgb::new(0.173, 0.243, 0.314, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn gray() -> Color {
    Color::Rgb(Rgb::new(0.59, 0.59, 0.59, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn green() -> Color {
    Color::Rgb(Rgb::new(0.08, 0.5, 0.33, None))
}

/// Renders the commercial proposal for one AI-project quote.
#[instrument(skip(input, result))]
pub fn ai_proposal_pdf(
    input: &AiProjectInput,
    result: &AiProjectResult,
    generated_at: NaiveDateTime,
) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Proposta de Automação IA",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    draw_header(&layer, &regular, &bold, generated_at);

    let mut y = 245.0;

    // 1. Scope
    section_title(&layer, &bold, "1. Escopo e Especificações", &mut y);
    let yes_no = |flag: bool| if flag { "Sim" } else { "Não" };
    let scope_rows = [
        (
            "Workflows".to_string(),
            input.workflow_count.to_string(),
            "Complexidade".to_string(),
            input.complexity.as_str().to_uppercase(),
        ),
        (
            "Integrações (Nodes)".to_string(),
            input.integration_count.to_string(),
            "Modelo IA".to_string(),
            input.model.as_str().to_uppercase(),
        ),
        (
            "RAG / Base Conhecimento".to_string(),
            yes_no(input.has_rag).to_string(),
            "Memória Vetorial".to_string(),
            yes_no(input.has_memory).to_string(),
        ),
        (
            "Hospedagem".to_string(),
            input.hosting.as_str().to_uppercase(),
            "Tokens/mês".to_string(),
            format_integer_br(input.estimated_tokens),
        ),
        (
            "Transferência IP".to_string(),
            yes_no(input.has_ip_transfer).to_string(),
            "Urgência".to_string(),
            yes_no(input.is_urgent).to_string(),
        ),
    ];
    for (label_a, value_a, label_b, value_b) in &scope_rows {
        layer.use_text(label_a.as_str(), 9.5, Mm(MARGIN_LEFT + 2.0), Mm(y), &bold);
        layer.use_text(value_a.as_str(), 9.5, Mm(64.0), Mm(y), &regular);
        layer.use_text(label_b.as_str(), 9.5, Mm(108.0), Mm(y), &bold);
        layer.use_text(value_b.as_str(), 9.5, Mm(160.0), Mm(y), &regular);
        y -= 6.5;
    }
    separator(&layer, &mut y);

    // 2. Setup investment
    section_title(&layer, &bold, "2. Investimento de Setup (Projeto)", &mut y);
    let setup_rows = [
        (
            "Estimativa de Horas".to_string(),
            format!("{} horas", format_decimal_br(result.estimated_hours, 0)),
        ),
        (
            "Valor Base (Horas + Integrações)".to_string(),
            format_currency(result.base_setup_value),
        ),
        (
            "Adicional Complexidade/Tecnologia".to_string(),
            format_currency(result.complexity_markup),
        ),
        (
            "Adicional Urgência".to_string(),
            format_currency(result.urgency_markup),
        ),
        (
            "Margem".to_string(),
            format_currency(result.breakdown.margin_addon),
        ),
    ];
    value_rows(&layer, &regular, &bold, &setup_rows, &mut y);
    total_row(
        &layer,
        &bold,
        "Investimento Final (Setup)",
        &format_currency(result.final_setup_value),
        &mut y,
    );
    separator(&layer, &mut y);

    // 3. Monthly costs
    section_title(&layer, &bold, "3. Manutenção e Custos Mensais", &mut y);
    let mut monthly_rows = vec![
        (
            "Infraestrutura (Hospedagem)".to_string(),
            format_currency(result.infra_cost),
        ),
        (
            "Consumo API (Tokens)".to_string(),
            format_currency(result.token_cost),
        ),
    ];
    if result.whatsapp_cost > Decimal::ZERO {
        monthly_rows.push((
            "Conversas WhatsApp (Meta)".to_string(),
            format_currency(result.whatsapp_cost),
        ));
    }
    monthly_rows.push((
        "Taxa de Suporte/Manutenção".to_string(),
        format_currency(input.support_fee),
    ));
    value_rows(&layer, &regular, &bold, &monthly_rows, &mut y);
    total_row(
        &layer,
        &bold,
        "Valor Mensal Total",
        &format_currency(result.final_monthly_value),
        &mut y,
    );
    separator(&layer, &mut y);

    // 4. ROI highlight, only when a savings estimate was given
    if input.monthly_savings > Decimal::ZERO {
        section_title(&layer, &bold, "4. Retorno sobre Investimento", &mut y);
        let payback = if result.payback_months >= PAYBACK_SENTINEL {
            "Indeterminado".to_string()
        } else {
            format!("{} meses", format_decimal_br(result.payback_months, 1))
        };
        let roi_rows = [
            (
                "Economia Mensal Estimada".to_string(),
                format_currency(input.monthly_savings),
            ),
            ("Payback".to_string(), payback),
            (
                "Lucro Anual Projetado".to_string(),
                format_currency(result.projected_annual_profit),
            ),
        ];
        let box_top = y + 4.0;
        layer.set_fill_color(green());
        for (label, value) in &roi_rows {
            layer.use_text(label.as_str(), 10.5, Mm(MARGIN_LEFT + 4.0), Mm(y), &bold);
            layer.use_text(value.as_str(), 10.5, Mm(VALUE_COLUMN), Mm(y), &bold);
            y -= 7.0;
        }
        layer.set_fill_color(black());
        outline_box(&layer, MARGIN_LEFT, y + 2.0, PAGE_WIDTH - MARGIN_LEFT, box_top);
        y -= 10.0;
    }

    draw_signature(&layer, &regular, &mut y);
    draw_footer(&layer, &regular);

    doc.save_to_bytes().map_err(|e| ReportError::Pdf(e.to_string()))
}

fn draw_header(
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    generated_at: NaiveDateTime,
) {
    layer.set_fill_color(dark_blue());
    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(Mm(0.0), Mm(PAGE_HEIGHT - 40.0)), false),
            (Point::new(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT - 40.0)), false),
            (Point::new(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT)), false),
            (Point::new(Mm(0.0), Mm(PAGE_HEIGHT)), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });

    layer.set_fill_color(white());
    layer.use_text(
        "Proposta de Automação & IA",
        22.0,
        Mm(48.0),
        Mm(PAGE_HEIGHT - 22.0),
        bold,
    );
    layer.use_text(
        format!(
            "Gerado em: {}",
            generated_at.format("%d/%m/%Y às %H:%M")
        ),
        10.0,
        Mm(78.0),
        Mm(PAGE_HEIGHT - 32.0),
        regular,
    );
    layer.set_fill_color(black());
}

fn section_title(layer: &PdfLayerReference, bold: &IndirectFontRef, title: &str, y: &mut f32) {
    layer.set_fill_color(dark_blue());
    layer.use_text(title, 13.0, Mm(MARGIN_LEFT), Mm(*y), bold);
    layer.set_fill_color(black());
    *y -= 9.0;
}

fn value_rows(
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    rows: &[(String, String)],
    y: &mut f32,
) {
    for (label, value) in rows {
        layer.use_text(label.as_str(), 10.0, Mm(MARGIN_LEFT + 2.0), Mm(*y), bold);
        layer.use_text(value.as_str(), 10.0, Mm(VALUE_COLUMN), Mm(*y), regular);
        *y -= 6.5;
    }
}

fn total_row(
    layer: &PdfLayerReference,
    bold: &IndirectFontRef,
    label: &str,
    value: &str,
    y: &mut f32,
) {
    *y -= 1.0;
    layer.use_text(label, 11.5, Mm(MARGIN_LEFT + 2.0), Mm(*y), bold);
    layer.use_text(value, 11.5, Mm(VALUE_COLUMN), Mm(*y), bold);
    *y -= 7.0;
}

fn separator(layer: &PdfLayerReference, y: &mut f32) {
    *y -= 2.0;
    layer.set_outline_color(gray());
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT), Mm(*y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN_LEFT), Mm(*y)), false),
        ],
        is_closed: false,
    });
    *y -= 9.0;
}

fn outline_box(layer: &PdfLayerReference, left: f32, bottom: f32, right: f32, top: f32) {
    layer.set_outline_color(green());
    layer.set_outline_thickness(0.6);
    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(Mm(left), Mm(bottom)), false),
            (Point::new(Mm(right), Mm(bottom)), false),
            (Point::new(Mm(right), Mm(top)), false),
            (Point::new(Mm(left), Mm(top)), false),
        ]],
        mode: PaintMode::Stroke,
        winding_order: WindingOrder::NonZero,
    });
}

fn draw_signature(layer: &PdfLayerReference, regular: &IndirectFontRef, y: &mut f32) {
    *y -= 12.0;
    layer.set_outline_color(black());
    layer.set_outline_thickness(0.4);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(60.0), Mm(*y)), false),
            (Point::new(Mm(150.0), Mm(*y)), false),
        ],
        is_closed: false,
    });
    *y -= 5.0;
    layer.use_text("Assinatura do Cliente", 9.0, Mm(88.0), Mm(*y), regular);
}

fn draw_footer(layer: &PdfLayerReference, regular: &IndirectFontRef) {
    layer.set_fill_color(gray());
    layer.use_text(
        "Proposta comercial válida por 15 dias.",
        8.0,
        Mm(78.0),
        Mm(14.0),
        regular,
    );
    layer.use_text(
        "Agência de IA - Proposta Comercial",
        8.0,
        Mm(80.0),
        Mm(10.0),
        regular,
    );
    layer.set_fill_color(black());
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::ai::{ComplexityLevel, HostingTier, LlmModel};

    fn sample() -> (AiProjectInput, AiProjectResult) {
        let input = AiProjectInput {
            workflow_count: 5,
            integration_count: 3,
            complexity: ComplexityLevel::Medium,
            model: LlmModel::Gpt4o,
            has_rag: false,
            has_memory: false,
            hosting: HostingTier::Cloud,
            estimated_tokens: 1_000_000,
            has_whatsapp: false,
            whatsapp_service_conversations: 0,
            whatsapp_marketing_conversations: 0,
            is_urgent: false,
            has_ip_transfer: false,
            hourly_rate: Decimal::from(200),
            integration_cost: Decimal::from(500),
            support_fee: Decimal::from(2_000),
            monthly_savings: Decimal::from(10_000),
            setup_margin_percent: Decimal::from(40),
            recurring_margin_percent: Decimal::from(50),
        };
        let result = AiProjectResult {
            estimated_hours: Decimal::from(60),
            base_setup_value: Decimal::from(12_500),
            complexity_markup: Decimal::from(3_750),
            urgency_markup: Decimal::ZERO,
            final_setup_value: Decimal::from(22_750),
            breakdown: model::ai::SetupBreakdown {
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
        };
        (input, result)
    }

    #[test]
    fn test_pdf_renders_bytes() {
        let (input, result) = sample();
        let generated_at = chrono::NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        let bytes = ai_proposal_pdf(&input, &result, generated_at).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1_000);
    }

    #[test]
    fn test_pdf_without_roi_section() {
        let (mut input, result) = sample();
        input.monthly_savings = Decimal::ZERO;
        let generated_at = chrono::NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        let bytes = ai_proposal_pdf(&input, &result, generated_at).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
