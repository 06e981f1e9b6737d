pub mod chubb_autos;
pub mod hdi_autos;

use crate::context::ExtractionContext;
use crate::model::{ExtractionAlert, PolicyExtractionResult};
use crate::parsing::anchor::{self, SearchOptions};
use crate::parsing::{dates, money};
use regex::Regex;

/// A per-insurer, per-product extraction routine.
///
/// Implementations are pure: no I/O, no shared state, and `extract` never
/// fails. Every field is guarded independently; a missing or malformed
/// value degrades into an [`ExtractionAlert`] on the returned record
/// instead of aborting it. Supporting a new insurer/product pair means
/// implementing this trait in a new module and adding one registry row.
pub trait Extractor: Send + Sync {
    /// Stable identifier, e.g. "chubb-autos".
    fn name(&self) -> &str;

    fn extract(&self, ctx: &ExtractionContext) -> PolicyExtractionResult;
}

/// Lines of a located section, falling back to the whole document when the
/// section probe found nothing. Fields normally sourced from that section
/// can then still be recovered from other pages.
pub(crate) fn section_lines<'a>(section: &'a str, document: &'a str) -> Vec<&'a str> {
    let source = if section.trim().is_empty() {
        document
    } else {
        section
    };
    source.lines().collect()
}

/// Anchored amount field: searched, normalized to two fraction digits.
/// A value that refuses normalization is preserved raw with a malformed
/// alert; an absent value stays empty with a not-found alert.
pub(crate) fn amount_field(
    lines: &[&str],
    label: &Regex,
    opts: SearchOptions,
    field: &str,
    alerts: &mut Vec<ExtractionAlert>,
) -> String {
    match anchor::find_anchored_value(lines, label, opts, &money::accept_amount) {
        Some(raw) => match money::normalize_amount(&raw) {
            Some(normalized) => normalized,
            None => {
                alerts.push(ExtractionAlert::malformed(field, &raw));
                raw
            }
        },
        None => {
            alerts.push(ExtractionAlert::not_found(field));
            String::new()
        }
    }
}

/// Anchored date field: searched, normalized to ISO `YYYY-MM-DD`, same
/// degradation rules as [`amount_field`].
pub(crate) fn date_field(
    lines: &[&str],
    label: &Regex,
    opts: SearchOptions,
    field: &str,
    alerts: &mut Vec<ExtractionAlert>,
) -> String {
    match anchor::find_anchored_value(lines, label, opts, &dates::accept_raw_date) {
        Some(raw) => match dates::normalize_date(&raw) {
            Some(iso) => iso,
            None => {
                alerts.push(ExtractionAlert::malformed(field, &raw));
                raw
            }
        },
        None => {
            alerts.push(ExtractionAlert::not_found(field));
            String::new()
        }
    }
}

/// Anchored free-text field with a caller-supplied acceptor.
pub(crate) fn text_field(
    lines: &[&str],
    label: &Regex,
    opts: SearchOptions,
    accept: &dyn Fn(&str) -> Option<String>,
    field: &str,
    alerts: &mut Vec<ExtractionAlert>,
) -> String {
    match anchor::find_anchored_value(lines, label, opts, accept) {
        Some(value) => value,
        None => {
            alerts.push(ExtractionAlert::not_found(field));
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AlertReason;
    use std::sync::LazyLock;

    static NET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)prima\s+neta").unwrap());

    #[test]
    fn test_amount_field_normalizes() {
        let mut alerts = Vec::new();
        let lines = ["Prima Neta 6,326.72"];
        let v = amount_field(
            &lines,
            &NET,
            SearchOptions::default(),
            "financials.net_premium",
            &mut alerts,
        );
        assert_eq!(v, "6326.72");
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_amount_field_missing_alerts() {
        let mut alerts = Vec::new();
        let lines = ["sin montos"];
        let v = amount_field(
            &lines,
            &NET,
            SearchOptions::default(),
            "financials.net_premium",
            &mut alerts,
        );
        assert!(v.is_empty());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].reason, AlertReason::NotFound);
        assert_eq!(alerts[0].field, "financials.net_premium");
    }

    #[test]
    fn test_date_field_keeps_raw_when_malformed() {
        static DESDE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)desde").unwrap());
        let mut alerts = Vec::new();
        // Matches the numeric date shape but is not a real calendar date
        let lines = ["Desde: 31/02/2024"];
        let v = date_field(
            &lines,
            &DESDE,
            SearchOptions::default(),
            "validity.start_date",
            &mut alerts,
        );
        assert_eq!(v, "31/02/2024");
        assert_eq!(alerts[0].reason, AlertReason::Malformed);
    }
}
