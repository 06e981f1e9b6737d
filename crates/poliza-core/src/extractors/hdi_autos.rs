use super::{amount_field, date_field, section_lines, text_field, Extractor};
use crate::context::ExtractionContext;
use crate::gazetteer;
use crate::model::{
    Address, Coverage, ExtractionAlert, FinancialBreakdown, Insured, NameParts, PaymentKind,
    PaymentPlan, PersonType, PolicyExtractionResult, PolicyIdentifiers, ValidityPeriod, Vehicle,
};
use crate::parsing::anchor::{truncate_at_labels, SearchOptions};
use crate::parsing::{coverage, frequency, names, receipts};
use chrono::Local;
use regex::Regex;
use std::sync::LazyLock;

/// Extractor for HDI auto policies.
///
/// HDI prints every field as "label: value" on one line, numbers its
/// validity captions ("Inicio de Vigencia" / "Fin de Vigencia") and mixes
/// numeric dates with long-form Spanish ones on the billing notice.
pub struct HdiAutos;

// Label anchors
static POLICY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:no\.?\s*de\s*)?p[óo]liza\s*:").unwrap());
static ENDORSEMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)endoso\s*:").unwrap());
static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)inciso\s*:").unwrap());
static PLAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:paquete|plan)\s*:").unwrap());
static INSURED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:nombre\s+del\s+asegurado|raz[óo]n\s+social|asegurado)\s*:").unwrap()
});
static RFC_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bR\.?\s?F\.?\s?C\.?\s*:").unwrap());
static EMAIL_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:correo\s+electr[óo]nico|correo|e-?mail)\s*:").unwrap()
});
static STREET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:domicilio|direcci[óo]n)\s*:").unwrap());
static VALIDITY_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)inicio\s+de\s+vigencia\s*:?").unwrap());
static VALIDITY_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)fin\s+de\s+vigencia\s*:?").unwrap());
static NET_PREMIUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)prima\s+neta").unwrap());
static DISCOUNTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)otros?\s+descuentos?").unwrap());
static SURCHARGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)recargo\s+por\s+pago\s+fraccionado|financiamiento").unwrap()
});
static ISSUANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)gastos?\s+de\s+expedici[óo]n|derecho\s+de\s+p[óo]liza").unwrap()
});
static TAX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bI\.?\s?V\.?\s?A\b\.?").unwrap());
static TOTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)prima\s+total|total\s+a\s+pagar|importe\s+total").unwrap()
});
static FIRST_RECEIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recibo\s+inicial|primer\s+recibo").unwrap());
static NEXT_RECEIPTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recibos?\s+subsecuentes?").unwrap());
static DUE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)fecha\s+l[íi]mite\s+de\s+pago").unwrap());
static GRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:d[íi]as|per[íi]odo)\s+de\s+gracia").unwrap());
static PAYMENT_FORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)forma\s+de\s+pago").unwrap());
static BRAND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bmarca\s*:").unwrap());
static MODEL_DESC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:descripci[óo]n|tipo|versi[óo]n)\s*:").unwrap()
});
static MODEL_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmodelo\s*:").unwrap());
static VIN_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:no\.?\s*de\s*)?serie\s*:").unwrap());
static ENGINE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:no\.?\s*de\s*)?motor\s*:").unwrap());
static PLATES_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bplacas?\s*:").unwrap());
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bcolor\s*:").unwrap());
static USE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\buso\s*:").unwrap());
static SERVICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bservicio\s*:").unwrap());
static COVERAGE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)coberturas\s+(?:contratadas|amparadas)|descripci[óo]n\s+de\s+coberturas").unwrap()
});
static FINANCIAL_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)prima\s+neta|otros?\s+descuentos?|recargo\s+por|gastos?\s+de\s+expedici[óo]n|\bI\.?\s?V\.?\s?A\b|prima\s+total|total\s+a\s+pagar",
    )
    .unwrap()
});

// Value shapes
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d[\d\-]{3,}").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,6}\b").unwrap());
static SMALL_INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,3}\b").unwrap());
static RFC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-ZÑ&]{3,4}\d{6}[A-Z0-9]{3}\b").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap()
});
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());
static VIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-HJ-NPR-Z0-9]{17}\b").unwrap());
static ENGINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z0-9]{5,}\b").unwrap());
static PLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{3}-?\d{3,4}[A-Z]?\b").unwrap());
static POSTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bC\.?\s?P\.?\s*:?\s*(\d{5})\b").unwrap());
static COLONY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bCOL(?:ONIA)?\b\.?\s*:?\s*([A-ZÁÉÍÓÚÑ][A-ZÁÉÍÓÚÑ0-9 ]+)").unwrap()
});

const LABEL_WORDS: &[&str] = &[
    "Póliza", "Endoso", "Inciso", "Paquete", "Plan", "Asegurado", "Razón Social", "Nombre",
    "RFC", "R.F.C", "Domicilio", "Dirección", "Colonia", "Col.", "Col ", "Municipio", "Estado",
    "C.P", "Correo", "Inicio", "Fin de", "Vigencia", "Emitida", "Marca", "Descripción", "Tipo",
    "Versión", "Modelo", "Serie", "Motor", "Placas", "Color", "Uso", "Servicio", "Forma de Pago",
];

fn accept_text(s: &str) -> Option<String> {
    let cut = truncate_at_labels(s, LABEL_WORDS);
    let cleaned = cut.trim().trim_matches(|c: char| c == ':' || c == ',').trim();
    if cleaned.chars().filter(|c| c.is_alphabetic()).count() >= 3 {
        Some(cleaned.to_string())
    } else {
        None
    }
}

fn accept_id(s: &str) -> Option<String> {
    ID_RE.find(s).map(|m| m.as_str().to_string())
}

fn accept_digits(s: &str) -> Option<String> {
    DIGITS_RE.find(s).map(|m| m.as_str().to_string())
}

fn accept_small_int(s: &str) -> Option<String> {
    SMALL_INT_RE.find(s).map(|m| m.as_str().to_string())
}

fn accept_rfc(s: &str) -> Option<String> {
    RFC_RE.find(s).map(|m| m.as_str().to_string())
}

fn accept_email(s: &str) -> Option<String> {
    EMAIL_RE.find(s).map(|m| m.as_str().to_string())
}

fn accept_year(s: &str) -> Option<String> {
    YEAR_RE.find(s).map(|m| m.as_str().to_string())
}

fn accept_vin(s: &str) -> Option<String> {
    VIN_RE.find(s).map(|m| m.as_str().to_string())
}

fn accept_engine(s: &str) -> Option<String> {
    ENGINE_RE.find(s).map(|m| m.as_str().to_string())
}

fn accept_plates(s: &str) -> Option<String> {
    PLATE_RE.find(s).map(|m| m.as_str().to_string())
}

impl Extractor for HdiAutos {
    fn name(&self) -> &str {
        "hdi-autos"
    }

    fn extract(&self, ctx: &ExtractionContext) -> PolicyExtractionResult {
        let mut alerts = Vec::new();
        let caratula = section_lines(&ctx.caratula_text, &ctx.document_text);
        let aviso = section_lines(&ctx.aviso_text, &ctx.document_text);

        let insured = extract_insured(&caratula, &mut alerts);
        let identifiers = extract_identifiers(&caratula, &mut alerts);
        let validity = extract_validity(&caratula, &mut alerts);
        let financials = extract_financials(&aviso, &mut alerts);
        let payment_plan = extract_payment_plan(&ctx.document_text, &aviso, &mut alerts);
        let vehicle = extract_vehicle(&caratula, &mut alerts);
        let coverages = extract_coverages(&caratula, &mut alerts);

        let schedule = receipts::parse_schedule(&aviso, Local::now().date_naive());
        if schedule.is_empty() && payment_plan.kind == PaymentKind::Installment {
            alerts.push(ExtractionAlert::not_found("schedule"));
        }

        PolicyExtractionResult {
            extractor: self.name().to_string(),
            insured,
            identifiers,
            validity,
            financials,
            payment_plan,
            vehicle: Some(vehicle),
            coverages,
            schedule,
            alerts,
        }
    }
}

fn extract_insured(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> Insured {
    let opts = SearchOptions::default();
    let tax_id = text_field(lines, &RFC_LABEL_RE, opts, &accept_rfc, "insured.tax_id", alerts)
        .replace(' ', "");
    let person_type = names::person_type_for_rfc(&tax_id, alerts);
    let printed = text_field(lines, &INSURED_RE, opts, &accept_text, "insured.name", alerts);
    let (name_parts, company_name) = match person_type {
        PersonType::Physical => (names::split_name(&printed, alerts), String::new()),
        PersonType::Moral => (NameParts::default(), printed),
    };
    let email = text_field(
        lines,
        &EMAIL_LABEL_RE,
        opts,
        &accept_email,
        "insured.email",
        alerts,
    );
    let address = extract_address(lines, alerts);

    Insured {
        person_type,
        name_parts,
        company_name,
        tax_id,
        address,
        email,
    }
}

fn extract_address(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> Address {
    let street = text_field(
        lines,
        &STREET_RE,
        SearchOptions::default(),
        &accept_text,
        "insured.address.street",
        alerts,
    );

    // Gazetteer scans stay inside the address block; the emission line
    // ("Emitida en Guadalajara...") also names a municipality.
    let window: Vec<&str> = match lines.iter().position(|l| STREET_RE.is_match(l)) {
        Some(i) => lines[i..(i + 3).min(lines.len())].to_vec(),
        None => lines.to_vec(),
    };

    let mut colony = String::new();
    let mut municipality = String::new();
    let mut state = String::new();
    let mut postal_code = String::new();

    for line in &window {
        if colony.is_empty() {
            if let Some(c) = COLONY_RE.captures(line) {
                colony = truncate_at_labels(c[1].trim(), LABEL_WORDS)
                    .trim()
                    .to_string();
            }
        }
        if postal_code.is_empty() {
            if let Some(c) = POSTAL_RE.captures(line) {
                postal_code = c[1].to_string();
            }
        }
        if state.is_empty() {
            if let Some(entry) = gazetteer::find_state(line) {
                state = entry.name.clone();
            }
        }
        if municipality.is_empty() {
            if let Some((entry, muni)) = gazetteer::find_municipality(line) {
                municipality = muni.to_string();
                if state.is_empty() {
                    state = entry.name.clone();
                }
            }
        }
    }

    for (field, value) in [
        ("insured.address.colony", &colony),
        ("insured.address.municipality", &municipality),
        ("insured.address.state", &state),
        ("insured.address.postal_code", &postal_code),
    ] {
        if value.is_empty() {
            alerts.push(ExtractionAlert::not_found(field));
        }
    }

    Address {
        street,
        colony,
        municipality,
        state,
        postal_code,
    }
}

fn extract_identifiers(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> PolicyIdentifiers {
    let opts = SearchOptions::default();
    PolicyIdentifiers {
        number: text_field(lines, &POLICY_RE, opts, &accept_id, "identifiers.number", alerts),
        endorsement: text_field(
            lines,
            &ENDORSEMENT_RE,
            opts,
            &accept_digits,
            "identifiers.endorsement",
            alerts,
        ),
        item_number: text_field(
            lines,
            &ITEM_RE,
            opts,
            &accept_digits,
            "identifiers.item_number",
            alerts,
        ),
        plan: text_field(lines, &PLAN_RE, opts, &accept_text, "identifiers.plan", alerts),
    }
}

fn extract_validity(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> ValidityPeriod {
    let opts = SearchOptions::default();
    ValidityPeriod {
        start_date: date_field(lines, &VALIDITY_START_RE, opts, "validity.start_date", alerts),
        end_date: date_field(lines, &VALIDITY_END_RE, opts, "validity.end_date", alerts),
    }
}

fn extract_financials(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> FinancialBreakdown {
    // HDI prints every amount on the same line as its caption
    let opts = SearchOptions::default();
    FinancialBreakdown {
        net_premium: amount_field(lines, &NET_PREMIUM_RE, opts, "financials.net_premium", alerts),
        other_discounts: amount_field(
            lines,
            &DISCOUNTS_RE,
            opts,
            "financials.other_discounts",
            alerts,
        ),
        installment_surcharge: amount_field(
            lines,
            &SURCHARGE_RE,
            opts,
            "financials.installment_surcharge",
            alerts,
        ),
        issuance_fee: amount_field(lines, &ISSUANCE_RE, opts, "financials.issuance_fee", alerts),
        tax: amount_field(lines, &TAX_RE, opts, "financials.tax", alerts),
        total: amount_field(lines, &TOTAL_RE, opts, "financials.total", alerts),
    }
}

fn extract_payment_plan(
    document_text: &str,
    aviso: &[&str],
    alerts: &mut Vec<ExtractionAlert>,
) -> PaymentPlan {
    let opts = SearchOptions::default();
    let mut plan = PaymentPlan::default();
    let mut frequency_found = false;

    if let Some((_, total)) = frequency::parse_series_indicator(document_text) {
        if let Some(label) = frequency::frequency_label(total) {
            plan.frequency = label.to_string();
            plan.kind = frequency::kind_for(total);
            frequency_found = true;
        }
    }

    if !frequency_found {
        for line in aviso {
            if !PAYMENT_FORM_RE.is_match(line) {
                continue;
            }
            if let Some((total, label)) = frequency::from_caption(line) {
                plan.frequency = label.to_string();
                plan.kind = frequency::kind_for(total);
                frequency_found = true;
            }
            break;
        }
    }

    if !frequency_found {
        alerts.push(ExtractionAlert::not_found("payment_plan.frequency"));
    }

    plan.first_installment_amount = amount_field(
        aviso,
        &FIRST_RECEIPT_RE,
        opts,
        "payment_plan.first_installment_amount",
        alerts,
    );
    plan.subsequent_installment_amount = amount_field(
        aviso,
        &NEXT_RECEIPTS_RE,
        opts,
        "payment_plan.subsequent_installment_amount",
        alerts,
    );
    plan.due_date = date_field(aviso, &DUE_DATE_RE, opts, "payment_plan.due_date", alerts);
    plan.grace_period_days = text_field(
        aviso,
        &GRACE_RE,
        opts,
        &accept_small_int,
        "payment_plan.grace_period_days",
        alerts,
    );
    plan
}

fn extract_vehicle(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> Vehicle {
    let opts = SearchOptions::default();
    Vehicle {
        brand: text_field(lines, &BRAND_RE, opts, &accept_text, "vehicle.brand", alerts),
        model: text_field(
            lines,
            &MODEL_DESC_RE,
            opts,
            &accept_text,
            "vehicle.model",
            alerts,
        ),
        year: text_field(
            lines,
            &MODEL_YEAR_RE,
            opts,
            &accept_year,
            "vehicle.year",
            alerts,
        ),
        vin: text_field(lines, &VIN_LABEL_RE, opts, &accept_vin, "vehicle.vin", alerts),
        engine_number: text_field(
            lines,
            &ENGINE_LABEL_RE,
            opts,
            &accept_engine,
            "vehicle.engine_number",
            alerts,
        ),
        plates: text_field(
            lines,
            &PLATES_LABEL_RE,
            opts,
            &accept_plates,
            "vehicle.plates",
            alerts,
        ),
        color: text_field(lines, &COLOR_RE, opts, &accept_text, "vehicle.color", alerts),
        usage: text_field(lines, &USE_RE, opts, &accept_text, "vehicle.use", alerts),
        service: text_field(
            lines,
            &SERVICE_RE,
            opts,
            &accept_text,
            "vehicle.service",
            alerts,
        ),
    }
}

fn extract_coverages(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> Vec<Coverage> {
    let span = coverage::coverage_span(lines, &COVERAGE_HEADER_RE, &FINANCIAL_LABEL_RE);
    let rows = coverage::parse_coverage_rows(&span);
    if rows.is_empty() {
        alerts.push(ExtractionAlert::not_found("coverages"));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageText;
    use crate::model::{CoverageKind, SumInsured};

    fn ctx_from(pages: &[&str]) -> ExtractionContext {
        let pages: Vec<PageText> = pages
            .iter()
            .enumerate()
            .map(|(i, text)| PageText {
                page_number: i + 1,
                lines: Vec::new(),
                raw_text: text.to_string(),
            })
            .collect();
        ExtractionContext::build(&pages)
    }

    fn full_policy() -> ExtractionContext {
        let caratula = "\
HDI SEGUROS, S.A. DE C.V.
CARÁTULA DE PÓLIZA SEGURO DE AUTOMÓVILES RESIDENTES
No. de Póliza: 4030998877 Endoso: 000000 Inciso: 0001
Paquete: AMPLIA PLUS
Nombre del Asegurado: TRANSPORTES SIGLO MODERNO SA DE CV
R.F.C.: TSM990101XX1
Domicilio: CALLE LAGO DE CHAPALA 45
Colonia: JARDINES DEL LAGO
Municipio: ZAPOPAN Estado: JALISCO C.P. 45040
Correo Electrónico: flotilla@tsm.com.mx
Inicio de Vigencia: 15/03/2024 Fin de Vigencia: 15/03/2025
Emitida en Guadalajara el 15 de marzo de 2024
Marca: TOYOTA Descripción: HILUX DOBLE CABINA Modelo: 2023
No. de Serie: MR0EX8DD0P0123456 No. de Motor: 2GD7654321
Placas: JKL-9876 Color: PLATA Uso: CARGA Servicio: MERCANTIL
COBERTURAS CONTRATADAS
COBERTURA SUMA ASEGURADA DEDUCIBLE PRIMA
DAÑOS MATERIALES VALOR COMERCIAL 5% 8,950.00
ROBO TOTAL VALOR COMERCIAL 10% 3,210.50
RESPONSABILIDAD CIVIL BIENES 1,500,000.00 NO APLICA 2,105.00
RESPONSABILIDAD CIVIL PERSONAS 1,500,000.00 NO APLICA 1,890.00
ASISTENCIA VIAL HDI AMPARADA NO APLICA 0.00
GASTOS MÉDICOS OCUPANTES 300,000.00 POR EVENTO NO APLICA 844.50";

        let aviso = "\
AVISO DE COBRO
Forma de Pago: SEMESTRAL
Recibo Inicial: 11,500.00
Recibos Subsecuentes: 10,656.00
Fecha Límite de Pago: 30 de marzo de 2024
Días de Gracia: 30
RECIBOS
1 15/03/2024 al 15/09/2024 11,500.00 30/03/2024
2 15/09/2024 al 15/03/2025 10,656.00 30/09/2024
Prima Neta: 18,500.00
Otros Descuentos: 0.00
Recargo por Pago Fraccionado: 1,000.00
Gastos de Expedición: 600.00
I.V.A.: 3,056.00
Prima Total: 22,156.00";

        ctx_from(&[caratula, aviso])
    }

    #[test]
    fn test_moral_person_populates_company_name() {
        let result = HdiAutos.extract(&full_policy());
        assert_eq!(result.insured.tax_id, "TSM990101XX1");
        assert_eq!(result.insured.person_type, PersonType::Moral);
        assert_eq!(
            result.insured.company_name,
            "TRANSPORTES SIGLO MODERNO SA DE CV"
        );
        assert!(result.insured.name_parts.paternal_surname.is_empty());
        assert!(result.insured.name_parts.given_names.is_empty());
    }

    #[test]
    fn test_identifiers_and_plan() {
        let result = HdiAutos.extract(&full_policy());
        assert_eq!(result.identifiers.number, "4030998877");
        assert_eq!(result.identifiers.endorsement, "000000");
        assert_eq!(result.identifiers.item_number, "0001");
        assert_eq!(result.identifiers.plan, "AMPLIA PLUS");
    }

    #[test]
    fn test_address_with_explicit_labels() {
        let result = HdiAutos.extract(&full_policy());
        let address = &result.insured.address;
        assert_eq!(address.street, "CALLE LAGO DE CHAPALA 45");
        assert_eq!(address.colony, "JARDINES DEL LAGO");
        assert_eq!(address.municipality, "ZAPOPAN");
        assert_eq!(address.state, "JALISCO");
        assert_eq!(address.postal_code, "45040");
    }

    #[test]
    fn test_validity_numeric_dates() {
        let result = HdiAutos.extract(&full_policy());
        assert_eq!(result.validity.start_date, "2024-03-15");
        assert_eq!(result.validity.end_date, "2025-03-15");
    }

    #[test]
    fn test_financials_same_line_layout() {
        let result = HdiAutos.extract(&full_policy());
        assert_eq!(result.financials.net_premium, "18500.00");
        assert_eq!(result.financials.other_discounts, "0.00");
        assert_eq!(result.financials.installment_surcharge, "1000.00");
        assert_eq!(result.financials.issuance_fee, "600.00");
        assert_eq!(result.financials.tax, "3056.00");
        assert_eq!(result.financials.total, "22156.00");
    }

    #[test]
    fn test_payment_plan_from_caption() {
        let result = HdiAutos.extract(&full_policy());
        assert_eq!(result.payment_plan.kind, PaymentKind::Installment);
        assert_eq!(result.payment_plan.frequency, "Semestral");
        assert_eq!(result.payment_plan.first_installment_amount, "11500.00");
        assert_eq!(result.payment_plan.subsequent_installment_amount, "10656.00");
        // Long-form Spanish date on the billing notice
        assert_eq!(result.payment_plan.due_date, "2024-03-30");
        assert_eq!(result.payment_plan.grace_period_days, "30");
    }

    #[test]
    fn test_vehicle() {
        let result = HdiAutos.extract(&full_policy());
        let vehicle = result.vehicle.expect("auto product carries a vehicle");
        assert_eq!(vehicle.brand, "TOYOTA");
        assert_eq!(vehicle.model, "HILUX DOBLE CABINA");
        assert_eq!(vehicle.year, "2023");
        assert_eq!(vehicle.vin, "MR0EX8DD0P0123456");
        assert_eq!(vehicle.engine_number, "2GD7654321");
        assert_eq!(vehicle.plates, "JKL-9876");
        assert_eq!(vehicle.color, "PLATA");
        assert_eq!(vehicle.usage, "CARGA");
        assert_eq!(vehicle.service, "MERCANTIL");
    }

    #[test]
    fn test_coverage_table_six_rows() {
        let result = HdiAutos.extract(&full_policy());
        assert_eq!(result.coverages.len(), 6);
        assert_eq!(result.coverages[0].sum_insured, SumInsured::CommercialValue);
        assert_eq!(result.coverages[2].name, "RESPONSABILIDAD CIVIL BIENES");
        assert_eq!(
            result.coverages[2].sum_insured,
            SumInsured::Amount("1500000.00".into())
        );
        assert_eq!(result.coverages[4].name, "ASISTENCIA VIAL HDI");
        assert_eq!(result.coverages[4].kind, CoverageKind::Included);
        assert_eq!(result.coverages[5].kind, CoverageKind::PerEvent);
    }

    #[test]
    fn test_schedule_two_receipts() {
        let result = HdiAutos.extract(&full_policy());
        assert_eq!(result.schedule.len(), 2);
        assert_eq!(result.schedule[0].amount, "11500.00");
        assert_eq!(result.schedule[0].due_date, "2024-03-30");
        assert_eq!(result.schedule[1].due_date, "2024-09-30");
    }

    #[test]
    fn test_complete_document_has_no_alerts() {
        let result = HdiAutos.extract(&full_policy());
        assert!(
            result.alerts.is_empty(),
            "unexpected alerts: {:?}",
            result.alerts
        );
    }
}
