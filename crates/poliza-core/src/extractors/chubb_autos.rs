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

/// Extractor for Chubb individual auto policies.
///
/// Chubb prints the billing notice as a two-column table whose amounts
/// render on the line above their caption after layout reconstruction, so
/// net premium and tax are searched value-first. Dates use abbreviated
/// Spanish month names ("01/MAY/2024").
pub struct ChubbAutos;

// Label anchors
static POLICY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)p[óo]liza\s*(?:no\.?\s*)?:").unwrap());
static ENDORSEMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)endoso\s*:").unwrap());
static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)inciso\s*:").unwrap());
static PLAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:plan|paquete)\s*:").unwrap());
static INSURED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:nombre\s+del\s+asegurado|asegurado|contratante)\s*:").unwrap()
});
static RFC_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bR\.?\s?F\.?\s?C\.?\s*:").unwrap());
static EMAIL_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:correo(?:\s+electr[óo]nico)?|e-?mail)\s*:").unwrap()
});
static STREET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:domicilio|direcci[óo]n)\s*:").unwrap());
static DESDE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bdesde\b").unwrap());
static HASTA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bhasta\b").unwrap());
static NET_PREMIUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)prima\s+neta").unwrap());
static DISCOUNTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)otros?\s+descuentos?").unwrap());
static SURCHARGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recargo\s+por\s+pago\s+fraccionado").unwrap());
static ISSUANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)gastos?\s+de\s+expedici[óo]n|derecho\s+de\s+p[óo]liza").unwrap()
});
static TAX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bI\.?\s?V\.?\s?A\b\.?").unwrap());
static TOTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)total\s+a\s+pagar|prima\s+total|importe\s+total").unwrap()
});
static FIRST_RECEIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)primer\s+recibo").unwrap());
static NEXT_RECEIPTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recibos?\s+subsecuentes?").unwrap());
static DUE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)fecha\s+l[íi]mite\s+de\s+pago").unwrap());
static GRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:per[íi]odo|d[íi]as)\s+de\s+gracia").unwrap());
static PAYMENT_FORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)forma\s+de\s+pago").unwrap());
static BRAND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bmarca\s*:").unwrap());
static MODEL_DESC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:tipo|descripci[óo]n|versi[óo]n)\s*:").unwrap()
});
static MODEL_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmodelo\s*:").unwrap());
static VIN_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:no\.?\s*de\s*)?serie(?:\s*\(vin\))?\s*:").unwrap()
});
static ENGINE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:no\.?\s*de\s*)?motor\s*:").unwrap());
static PLATES_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bplacas?\s*:").unwrap());
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bcolor\s*:").unwrap());
static USE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\buso\s*:").unwrap());
static SERVICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bservicio\s*:").unwrap());
static COVERAGE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)coberturas\s+(?:contratadas|amparadas)").unwrap()
});
static FINANCIAL_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)prima\s+neta|otros?\s+descuentos?|recargo\s+por|gastos?\s+de\s+expedici[óo]n|\bI\.?\s?V\.?\s?A\b|total\s+a\s+pagar|prima\s+total",
    )
    .unwrap()
});

// Value shapes
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d[\d\-]{3,}").unwrap());
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

/// Caption words that end a free-text value when several labeled fields
/// share one physical line.
const LABEL_WORDS: &[&str] = &[
    "Póliza", "Endoso", "Inciso", "Plan", "Paquete", "Asegurado", "Contratante", "Nombre",
    "RFC", "R.F.C", "Domicilio", "Dirección", "Colonia", "Col.", "Col ", "Municipio", "Estado",
    "C.P", "Correo", "Vigencia", "Desde", "Hasta", "Marca", "Tipo", "Descripción", "Versión",
    "Modelo", "Serie", "Motor", "Placas", "Color", "Uso", "Servicio", "Forma de Pago", "Emitida",
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

impl Extractor for ChubbAutos {
    fn name(&self) -> &str {
        "chubb-autos"
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

    // Gazetteer scans stay inside the address block; municipality names
    // also occur as surnames and emission cities elsewhere on the page.
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
            &accept_small_int,
            "identifiers.endorsement",
            alerts,
        ),
        item_number: text_field(
            lines,
            &ITEM_RE,
            opts,
            &accept_small_int,
            "identifiers.item_number",
            alerts,
        ),
        plan: text_field(lines, &PLAN_RE, opts, &accept_text, "identifiers.plan", alerts),
    }
}

fn extract_validity(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> ValidityPeriod {
    let opts = SearchOptions::default();
    ValidityPeriod {
        start_date: date_field(lines, &DESDE_RE, opts, "validity.start_date", alerts),
        end_date: date_field(lines, &HASTA_RE, opts, "validity.end_date", alerts),
    }
}

fn extract_financials(lines: &[&str], alerts: &mut Vec<ExtractionAlert>) -> FinancialBreakdown {
    let same_line = SearchOptions::default();
    // Net premium and tax print above their captions in Chubb's billing column
    let value_first = SearchOptions {
        value_precedes_label: true,
    };

    FinancialBreakdown {
        net_premium: amount_field(
            lines,
            &NET_PREMIUM_RE,
            value_first,
            "financials.net_premium",
            alerts,
        ),
        other_discounts: amount_field(
            lines,
            &DISCOUNTS_RE,
            same_line,
            "financials.other_discounts",
            alerts,
        ),
        installment_surcharge: amount_field(
            lines,
            &SURCHARGE_RE,
            same_line,
            "financials.installment_surcharge",
            alerts,
        ),
        issuance_fee: amount_field(
            lines,
            &ISSUANCE_RE,
            same_line,
            "financials.issuance_fee",
            alerts,
        ),
        tax: amount_field(lines, &TAX_RE, value_first, "financials.tax", alerts),
        total: amount_field(lines, &TOTAL_RE, same_line, "financials.total", alerts),
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

    // The printed "Serie del aviso: N/M" indicator is authoritative
    if let Some((_, total)) = frequency::parse_series_indicator(document_text) {
        match frequency::frequency_label(total) {
            Some(label) => {
                plan.frequency = label.to_string();
                plan.kind = frequency::kind_for(total);
                frequency_found = true;
            }
            None => {
                alerts.push(ExtractionAlert::malformed(
                    "payment_plan.frequency",
                    &format!("serie del aviso con {total} recibos"),
                ));
                frequency_found = true;
            }
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
CHUBB Seguros México, S.A. de C.V.
CARÁTULA DE PÓLIZA DE AUTOMÓVILES INDIVIDUAL
Póliza: 123-4567890 Endoso: 0 Inciso: 1
Plan: AMPLIA
Asegurado: GARCIA LOPEZ JUAN CARLOS
RFC: GALJ850101AB1
Domicilio: AV INSURGENTES SUR 1234 COL DEL VALLE
BENITO JUAREZ, CIUDAD DE MEXICO C.P. 03100
Correo: juan.garcia@correo.mx
Vigencia Desde: 01/MAY/2024 Hasta: 01/MAY/2025
Marca: NISSAN Tipo: VERSA ADVANCE Modelo: 2022
Serie: 3N1CN7AD0NK123456 Motor: HR16A123456 Placas: ABC-1234
Color: BLANCO Uso: PARTICULAR Servicio: PARTICULAR
COBERTURAS CONTRATADAS
DAÑOS MATERIALES VALOR COMERCIAL 5% 3,804.00
ROBO TOTAL VALOR COMERCIAL 10% 950.50
RESPONSABILIDAD CIVIL 3,000,000.00 NO APLICA 1,110.22
GASTOS MÉDICOS OCUPANTES 200,000.00 POR EVENTO NO APLICA 462.00";

        let aviso = "\
AVISO DE COBRO
Serie del aviso: 1/4
Primer Recibo 2,262.64
Recibos Subsecuentes 2,000.00
Fecha Límite de Pago: 16/05/2024
Período de Gracia: 14 días
RECIBOS PROGRAMADOS
1 01/05/2024 al 01/08/2024 2,262.64 16/05/2024
2 01/08/2024 al 01/11/2024 2,000.00 16/08/2024
3 01/11/2024 al 01/02/2025 2,000.00 16/11/2024
4 01/02/2025 al 01/05/2025 2,000.00 16/02/2025
6,326.72
Prima Neta
Otros Descuentos 0.00
Recargo por Pago Fraccionado 316.34
Gastos de Expedición 480.00
1,139.58
I.V.A.
Total a Pagar 8,262.64";

        ctx_from(&[caratula, aviso])
    }

    #[test]
    fn test_insured_and_identifiers() {
        let result = ChubbAutos.extract(&full_policy());

        assert_eq!(result.insured.tax_id, "GALJ850101AB1");
        assert_eq!(result.insured.person_type, PersonType::Physical);
        assert_eq!(result.insured.name_parts.paternal_surname, "GARCIA");
        assert_eq!(result.insured.name_parts.maternal_surname, "LOPEZ");
        assert_eq!(result.insured.name_parts.given_names, "JUAN CARLOS");
        assert!(result.insured.company_name.is_empty());
        assert_eq!(result.insured.email, "juan.garcia@correo.mx");

        assert_eq!(result.identifiers.number, "123-4567890");
        assert_eq!(result.identifiers.endorsement, "0");
        assert_eq!(result.identifiers.item_number, "1");
        assert_eq!(result.identifiers.plan, "AMPLIA");
    }

    #[test]
    fn test_address_parts() {
        let result = ChubbAutos.extract(&full_policy());
        let address = &result.insured.address;
        assert_eq!(address.street, "AV INSURGENTES SUR 1234");
        assert_eq!(address.colony, "DEL VALLE");
        assert_eq!(address.municipality, "BENITO JUAREZ");
        assert_eq!(address.state, "CIUDAD DE MEXICO");
        assert_eq!(address.postal_code, "03100");
    }

    #[test]
    fn test_validity_abbreviated_months() {
        let result = ChubbAutos.extract(&full_policy());
        assert_eq!(result.validity.start_date, "2024-05-01");
        assert_eq!(result.validity.end_date, "2025-05-01");
    }

    #[test]
    fn test_financials_value_precedes_label() {
        let result = ChubbAutos.extract(&full_policy());
        assert_eq!(result.financials.net_premium, "6326.72");
        assert_eq!(result.financials.other_discounts, "0.00");
        assert_eq!(result.financials.installment_surcharge, "316.34");
        assert_eq!(result.financials.issuance_fee, "480.00");
        assert_eq!(result.financials.tax, "1139.58");
        assert_eq!(result.financials.total, "8262.64");
    }

    #[test]
    fn test_payment_plan_from_series() {
        let result = ChubbAutos.extract(&full_policy());
        assert_eq!(result.payment_plan.kind, PaymentKind::Installment);
        assert_eq!(result.payment_plan.frequency, "Trimestral");
        assert_eq!(result.payment_plan.first_installment_amount, "2262.64");
        assert_eq!(result.payment_plan.subsequent_installment_amount, "2000.00");
        assert_eq!(result.payment_plan.due_date, "2024-05-16");
        assert_eq!(result.payment_plan.grace_period_days, "14");
    }

    #[test]
    fn test_vehicle() {
        let result = ChubbAutos.extract(&full_policy());
        let vehicle = result.vehicle.expect("auto product carries a vehicle");
        assert_eq!(vehicle.brand, "NISSAN");
        assert_eq!(vehicle.model, "VERSA ADVANCE");
        assert_eq!(vehicle.year, "2022");
        assert_eq!(vehicle.vin, "3N1CN7AD0NK123456");
        assert_eq!(vehicle.engine_number, "HR16A123456");
        assert_eq!(vehicle.plates, "ABC-1234");
        assert_eq!(vehicle.color, "BLANCO");
        assert_eq!(vehicle.usage, "PARTICULAR");
        assert_eq!(vehicle.service, "PARTICULAR");
    }

    #[test]
    fn test_coverage_table() {
        let result = ChubbAutos.extract(&full_policy());
        assert_eq!(result.coverages.len(), 4);
        assert_eq!(result.coverages[0].name, "DAÑOS MATERIALES");
        assert_eq!(result.coverages[0].sum_insured, SumInsured::CommercialValue);
        assert_eq!(result.coverages[0].deductible, "5%");
        assert_eq!(result.coverages[0].premium, "3804.00");
        assert_eq!(result.coverages[3].kind, CoverageKind::PerEvent);
    }

    #[test]
    fn test_schedule_rows() {
        let result = ChubbAutos.extract(&full_policy());
        assert_eq!(result.schedule.len(), 4);
        assert_eq!(result.schedule[0].installment_number, 1);
        assert_eq!(result.schedule[0].amount, "2262.64");
        assert_eq!(result.schedule[0].due_date, "2024-05-16");
        assert_eq!(result.schedule[3].due_date, "2025-02-16");
    }

    #[test]
    fn test_complete_document_has_no_alerts() {
        let result = ChubbAutos.extract(&full_policy());
        assert!(
            result.alerts.is_empty(),
            "unexpected alerts: {:?}",
            result.alerts
        );
    }

    #[test]
    fn test_sparse_document_degrades_to_alerts() {
        let ctx = ctx_from(&["CHUBB Seguros México\nPóliza de Automóviles\nRFC: GALJ850101AB1"]);
        let result = ChubbAutos.extract(&ctx);
        assert_eq!(result.insured.tax_id, "GALJ850101AB1");
        assert!(result.financials.net_premium.is_empty());
        assert!(result
            .alerts
            .iter()
            .any(|a| a.field == "financials.net_premium"));
        assert!(result.alerts.iter().any(|a| a.field == "coverages"));
    }
}
