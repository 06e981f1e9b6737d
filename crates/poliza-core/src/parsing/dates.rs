use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Fixed month-name table: Spanish full names and the 3-letter
/// abbreviations insurers print inside `DD/Mon/YYYY` dates.
static MONTHS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("ene", 1);
    m.insert("enero", 1);
    m.insert("feb", 2);
    m.insert("febrero", 2);
    m.insert("mar", 3);
    m.insert("marzo", 3);
    m.insert("abr", 4);
    m.insert("abril", 4);
    m.insert("may", 5);
    m.insert("mayo", 5);
    m.insert("jun", 6);
    m.insert("junio", 6);
    m.insert("jul", 7);
    m.insert("julio", 7);
    m.insert("ago", 8);
    m.insert("agosto", 8);
    m.insert("sep", 9);
    m.insert("sept", 9);
    m.insert("septiembre", 9);
    m.insert("oct", 10);
    m.insert("octubre", 10);
    m.insert("nov", 11);
    m.insert("noviembre", 11);
    m.insert("dic", 12);
    m.insert("diciembre", 12);
    m
});

static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());
static MONTH_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/([A-Za-zÁÉÍÓÚáéíóú]{3,4})/(\d{4})$").unwrap());
static LONG_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2})\s+de\s+([A-Za-zÁÉÍÓÚáéíóú]+)\s+de\s+(\d{4})$").unwrap()
});
static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4})$").unwrap());

/// Unanchored variants used to pick a date token out of a longer line.
static FIND_MONTH_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}/[A-Za-zÁÉÍÓÚáéíóú]{3,4}/\d{4}").unwrap());
static FIND_LONG_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{1,2}\s+de\s+[A-Za-zÁÉÍÓÚáéíóú]+\s+de\s+\d{4}").unwrap()
});
static FIND_NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}[/-]\d{1,2}[/-]\d{4}").unwrap());
static FIND_ISO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// Normalize a printed date to ISO `YYYY-MM-DD`.
///
/// Handles the four source formats that appear on supported policies:
/// - "01/MAY/2024" (abbreviated month name)
/// - "1 de mayo de 2024" (full Spanish month name)
/// - "01/05/2024"
/// - "01-05-2024"
///
/// Already-ISO input passes through validated, making the function
/// idempotent. Returns `None` for unrecognized or impossible calendar
/// dates; callers keep the raw string and record a malformed alert.
pub fn normalize_date(raw: &str) -> Option<String> {
    let s = raw.trim();

    if let Some(c) = ISO_RE.captures(s) {
        return build(parse_num(&c[1]), parse_num(&c[2]), parse_num(&c[3]));
    }
    if let Some(c) = MONTH_NAME_RE.captures(s) {
        let month = month_number(&c[2])?;
        return build(parse_num(&c[3]), month, parse_num(&c[1]));
    }
    if let Some(c) = LONG_FORM_RE.captures(s) {
        let month = month_number(&c[2])?;
        return build(parse_num(&c[3]), month, parse_num(&c[1]));
    }
    if let Some(c) = NUMERIC_RE.captures(s) {
        return build(parse_num(&c[3]), parse_num(&c[2]), parse_num(&c[1]));
    }
    None
}

/// First date-looking token inside `s`, raw. Shaped as an acceptor for
/// label-anchored searches; normalization (and the malformed alert when it
/// fails) happens at the caller.
pub fn accept_raw_date(s: &str) -> Option<String> {
    for re in [
        &*FIND_MONTH_NAME_RE,
        &*FIND_LONG_FORM_RE,
        &*FIND_ISO_RE,
        &*FIND_NUMERIC_RE,
    ] {
        if let Some(m) = re.find(s) {
            return Some(m.as_str().to_string());
        }
    }
    None
}

/// Parse an already-normalized ISO date.
pub fn as_naive(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}

fn month_number(name: &str) -> Option<u32> {
    let folded: String = name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            _ => c,
        })
        .collect();
    MONTHS.get(folded.as_str()).copied()
}

fn parse_num(s: &str) -> u32 {
    s.parse().unwrap_or(0)
}

fn build(year: u32, month: u32, day: u32) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}
