use crate::model::PaymentKind;
use regex::Regex;
use std::sync::LazyLock;

/// "Serie del aviso: 1/4" — current receipt over total receipts.
static SERIES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)serie\s+del\s+aviso\s*:?\s*(\d{1,2})\s*/\s*(\d{1,2})").unwrap()
});

/// Printed frequency captions, checked in order.
const CAPTIONS: &[(&str, u32)] = &[
    ("MENSUAL", 12),
    ("BIMESTRAL", 6),
    ("TRIMESTRAL", 4),
    ("CUATRIMESTRAL", 3),
    ("SEMESTRAL", 2),
    ("ANUAL", 1),
    ("CONTADO", 1),
];

/// Parse the printed current/total installment indicator.
pub fn parse_series_indicator(text: &str) -> Option<(u32, u32)> {
    let c = SERIES_RE.captures(text)?;
    Some((c[1].parse().unwrap_or(0), c[2].parse().unwrap_or(0)))
}

/// Fixed mapping from total installment count to the printed frequency
/// label. This is a lookup, never inferred from amounts.
pub fn frequency_label(total_installments: u32) -> Option<&'static str> {
    match total_installments {
        1 => Some("Anual"),
        2 => Some("Semestral"),
        3 => Some("Cuatrimestral"),
        4 => Some("Trimestral"),
        6 => Some("Bimestral"),
        12 => Some("Mensual"),
        _ => None,
    }
}

/// Payment kind implied by the installment count.
pub fn kind_for(total_installments: u32) -> PaymentKind {
    if total_installments <= 1 {
        PaymentKind::Annual
    } else {
        PaymentKind::Installment
    }
}

/// Derive (installment count, label) from an explicit frequency caption,
/// e.g. a "Forma de Pago: TRIMESTRAL" line.
pub fn from_caption(text: &str) -> Option<(u32, &'static str)> {
    let upper = text.to_uppercase();
    // "CUATRIMESTRAL" contains "TRIMESTRAL"; check for it as a whole word.
    if upper.contains("CUATRIMESTRAL") {
        return Some((3, "Cuatrimestral"));
    }
    CAPTIONS
        .iter()
        .find(|(caption, _)| upper.contains(caption))
        .and_then(|(_, total)| frequency_label(*total).map(|label| (*total, label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_indicator() {
        assert_eq!(parse_series_indicator("Serie del aviso: 1/4"), Some((1, 4)));
        assert_eq!(
            parse_series_indicator("SERIE DEL AVISO 2 / 12"),
            Some((2, 12))
        );
        assert!(parse_series_indicator("sin serie").is_none());
    }

    #[test]
    fn test_frequency_lookup() {
        assert_eq!(frequency_label(1), Some("Anual"));
        assert_eq!(frequency_label(2), Some("Semestral"));
        assert_eq!(frequency_label(3), Some("Cuatrimestral"));
        assert_eq!(frequency_label(4), Some("Trimestral"));
        assert_eq!(frequency_label(6), Some("Bimestral"));
        assert_eq!(frequency_label(12), Some("Mensual"));
        assert_eq!(frequency_label(5), None);
    }

    #[test]
    fn test_kind_for() {
        assert_eq!(kind_for(1), PaymentKind::Annual);
        assert_eq!(kind_for(4), PaymentKind::Installment);
    }

    #[test]
    fn test_from_caption() {
        assert_eq!(from_caption("Forma de Pago: TRIMESTRAL"), Some((4, "Trimestral")));
        assert_eq!(from_caption("forma de pago contado"), Some((1, "Anual")));
        assert_eq!(from_caption("Pago Cuatrimestral"), Some((3, "Cuatrimestral")));
        assert!(from_caption("Forma de Pago: TARJETA").is_none());
    }
}
