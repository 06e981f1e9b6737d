use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Monetary token: "$8,223.32", "$ 950", "1,443.58" or "8223.32".
///
/// A bare integer is not accepted — street numbers, years and page numbers
/// would otherwise pass as amounts. A plain number only qualifies with
/// thousands separators or exactly two decimal digits.
static MONEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$\s*\d{1,3}(?:,\d{3})*(?:\.\d{1,2})?|\$\s*\d+(?:\.\d{1,2})?|\d{1,3}(?:,\d{3})+(?:\.\d{1,2})?\b|\d+\.\d{2}\b",
    )
    .unwrap()
});

/// First monetary token in `s`. Shaped as an acceptor for
/// [`crate::parsing::anchor::find_anchored_value`].
pub fn accept_amount(s: &str) -> Option<String> {
    MONEY_RE.find(s).map(|m| m.as_str().to_string())
}

/// Last monetary token in `s`, with its byte range.
pub fn last_amount(s: &str) -> Option<(std::ops::Range<usize>, String)> {
    MONEY_RE
        .find_iter(s)
        .last()
        .map(|m| (m.range(), m.as_str().to_string()))
}

/// True when the trailing non-space text of `s` is a monetary token.
pub fn ends_with_amount(s: &str) -> bool {
    let trimmed = s.trim_end();
    MONEY_RE
        .find_iter(trimmed)
        .last()
        .map(|m| m.end() == trimmed.len())
        .unwrap_or(false)
}

/// Normalize a monetary token to a fixed-point string with two fraction
/// digits: "$8,223.32" -> "8223.32", "1,443.58" -> "1443.58",
/// "8180" -> "8180.00". Returns `None` when `raw` does not parse as an
/// amount; callers keep the raw string and record a malformed alert, so
/// this never throws away data and never panics.
pub fn normalize_amount(raw: &str) -> Option<String> {
    let cleaned = raw
        .trim()
        .trim_start_matches('$')
        .trim()
        .replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    let value = Decimal::from_str(&cleaned).ok()?;
    Some(format!("{:.2}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dollar_prefixed() {
        assert_eq!(normalize_amount("$8,223.32").as_deref(), Some("8223.32"));
    }

    #[test]
    fn test_normalize_thousands() {
        assert_eq!(normalize_amount("1,443.58").as_deref(), Some("1443.58"));
    }

    #[test]
    fn test_normalize_pads_fraction() {
        assert_eq!(normalize_amount("8180").as_deref(), Some("8180.00"));
        assert_eq!(normalize_amount("$ 950.5").as_deref(), Some("950.50"));
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(normalize_amount("not a number").is_none());
        assert!(normalize_amount("").is_none());
        assert!(normalize_amount("$").is_none());
    }

    #[test]
    fn test_accept_rejects_bare_integers() {
        // Street number and year must not read as amounts
        assert!(accept_amount("AV INSURGENTES SUR 1234").is_none());
        assert!(accept_amount("Modelo 2022").is_none());
    }

    #[test]
    fn test_accept_two_decimal_plain() {
        assert_eq!(accept_amount("importe 6326.72 pesos").as_deref(), Some("6326.72"));
    }

    #[test]
    fn test_accept_dollar_integer() {
        assert_eq!(accept_amount("pago $ 950").as_deref(), Some("$ 950"));
    }

    #[test]
    fn test_ends_with_amount() {
        assert!(ends_with_amount("DAÑOS MATERIALES VALOR COMERCIAL 5% 3,804.00"));
        assert!(ends_with_amount("RC 3,000,000.00 NO APLICA 1,771.44  "));
        assert!(!ends_with_amount("GASTOS MÉDICOS OCUPANTES"));
        assert!(!ends_with_amount("SUMA ASEGURADA DEDUCIBLE PRIMA"));
    }

    #[test]
    fn test_last_amount_range() {
        let (range, token) = last_amount("200,000.00 POR EVENTO 462.00").unwrap();
        assert_eq!(token, "462.00");
        assert_eq!(&"200,000.00 POR EVENTO 462.00"[range], "462.00");
    }

    #[test]
    fn test_three_decimals_not_truncated_into_amount() {
        // "1234.567" must not yield a phantom "1234.56"
        assert!(accept_amount("medida 1234.567").is_none());
    }
}
