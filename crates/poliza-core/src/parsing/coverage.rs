use crate::model::{Coverage, CoverageKind, SumInsured};
use crate::parsing::money;
use regex::Regex;
use std::sync::LazyLock;

/// Deductible cell: a percentage or a no-deductible literal/code.
static DEDUCTIBLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(?:\.\d+)?\s*%|NO\s+APLICA|S\.?C\.?G\.?P\.?").unwrap()
});

/// Literal sum-insured cells insurers print instead of an amount.
static SUM_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)VALOR\s+COMERCIAL|VALOR\s+FACTURA|AMPARADA").unwrap()
});

static PER_EVENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)POR\s+EVENTO").unwrap());

/// Column headers of the table itself; these never start a data row.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)SUMA\s+ASEGURADA|^\s*COBERTURAS?\b|^\s*DEDUCIBLE\b|^\s*PRIMA\s*$").unwrap()
});

/// Locate the coverage-table span: the lines after the coverages header,
/// up to (excluding) the first line matching a financial label. Financial
/// labels mark the end of the table and must never be read as rows.
pub fn coverage_span<'a>(
    lines: &[&'a str],
    header: &Regex,
    financial_label: &Regex,
) -> Vec<&'a str> {
    let Some(start) = lines.iter().position(|l| header.is_match(l)) else {
        return Vec::new();
    };
    let start = start + 1;
    let end = lines[start..]
        .iter()
        .position(|l| financial_label.is_match(l))
        .map(|offset| start + offset)
        .unwrap_or(lines.len());
    lines[start..end].to_vec()
}

/// Reconstruct coverage rows from a table span.
///
/// A row's name or cells may wrap across two raw lines, so consecutive
/// lines are accumulated until the accumulation ends in a monetary token;
/// that trailing token is the row's premium. Scanning backward from it:
/// the deductible token, then the sum-insured token, and whatever text
/// remains is the coverage name. Accumulations that never reach a monetary
/// token are discarded as non-data lines (headers, notes).
pub fn parse_coverage_rows(span: &[&str]) -> Vec<Coverage> {
    let mut rows = Vec::new();
    let mut pending: Option<String> = None;

    for raw in span {
        let line = raw.trim();
        // Table rows print in uppercase; prose notes do not and must never
        // glue onto a data row.
        if line.is_empty() || HEADER_RE.is_match(line) || is_note_line(line) {
            pending = None;
            continue;
        }

        let accumulated = match pending.take() {
            Some(prev) => format!("{} {}", prev, line),
            None => line.to_string(),
        };

        if money::ends_with_amount(&accumulated) {
            if let Some(row) = parse_row(&accumulated) {
                rows.push(row);
            }
        } else {
            // Keep at most one wrapped line; an older one was a non-data line.
            pending = Some(if accumulated.len() > line.len() {
                line.to_string()
            } else {
                accumulated
            });
        }
    }

    rows
}

fn is_note_line(line: &str) -> bool {
    line.chars().any(|c| c.is_lowercase())
}

fn parse_row(row: &str) -> Option<Coverage> {
    let trimmed = row.trim();
    let (premium_range, premium_raw) = money::last_amount(trimmed)?;
    let premium = money::normalize_amount(&premium_raw)?;
    let kind_hint_per_event = PER_EVENT_RE.is_match(trimmed);

    let mut rest = trimmed[..premium_range.start].trim_end();

    // Deductible sits right before the premium when present.
    let mut deductible = String::new();
    if let Some(m) = DEDUCTIBLE_RE.find_iter(rest).last() {
        deductible = m.as_str().trim().to_string();
        rest = rest[..m.start()].trim_end();
    }

    // Sum insured: a literal beats an amount; otherwise the last amount.
    let (sum_insured, name_end) = match SUM_LITERAL_RE.find_iter(rest).last() {
        Some(m) => (literal_sum(m.as_str()), m.start()),
        None => match money::last_amount(rest) {
            Some((range, raw)) => {
                let amount = money::normalize_amount(&raw)?;
                (SumInsured::Amount(amount), range.start)
            }
            None => return None,
        },
    };

    let name = rest[..name_end].trim().trim_end_matches([':', '-']).trim();
    if name.is_empty() {
        return None;
    }

    let kind = if kind_hint_per_event {
        CoverageKind::PerEvent
    } else if sum_insured == SumInsured::Covered {
        CoverageKind::Included
    } else {
        CoverageKind::Flat
    };

    Some(Coverage {
        name: name.to_string(),
        sum_insured,
        deductible,
        premium,
        kind,
    })
}

fn literal_sum(text: &str) -> SumInsured {
    let upper = text.to_uppercase();
    if upper.contains("COMERCIAL") {
        SumInsured::CommercialValue
    } else if upper.contains("FACTURA") {
        SumInsured::InvoiceValue
    } else {
        SumInsured::Covered
    }
}
