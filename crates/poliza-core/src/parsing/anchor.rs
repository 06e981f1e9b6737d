use regex::Regex;

/// Where a field's printed value sits relative to its label.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// The value prints on the line above its caption. Column layouts
    /// sometimes render the number first and the label underneath.
    pub value_precedes_label: bool,
}

/// Label-anchored value search over reconstructed lines.
///
/// For every line matching `label`, an ordered candidate list is evaluated
/// and the first candidate `accept` turns into a value wins:
///
/// 1. the previous line, when `value_precedes_label` is set
/// 2. the matching line itself: first the text after the label, then the
///    text before it
/// 3. the next line
/// 4. the previous line, as a symmetric last resort
///
/// The same logical field appears in different relative positions across
/// insurer templates, and even within one template when a printed value
/// wraps to an adjacent line; the fallback chain covers all observed
/// placements. Returns `None` when every candidate of every matching line
/// is rejected — the caller records the missing field as an alert.
pub fn find_anchored_value(
    lines: &[&str],
    label: &Regex,
    opts: SearchOptions,
    accept: &dyn Fn(&str) -> Option<String>,
) -> Option<String> {
    for (i, line) in lines.iter().enumerate() {
        let Some(m) = label.find(line) else {
            continue;
        };

        let after = &line[m.end()..];
        let before = &line[..m.start()];
        let prev = if i > 0 { Some(lines[i - 1]) } else { None };
        let next = lines.get(i + 1).copied();

        let mut candidates: Vec<&str> = Vec::with_capacity(5);
        if opts.value_precedes_label {
            if let Some(p) = prev {
                candidates.push(p);
            }
        }
        candidates.push(after);
        candidates.push(before);
        if let Some(n) = next {
            candidates.push(n);
        }
        if !opts.value_precedes_label {
            if let Some(p) = prev {
                candidates.push(p);
            }
        }

        for candidate in candidates {
            if let Some(value) = accept(candidate) {
                tracing::debug!(label = label.as_str(), value = %value, "anchored value found");
                return Some(value);
            }
        }
    }
    None
}

/// Truncate `s` at the earliest occurrence of any label keyword
/// (case-insensitive). Used to cut a captured value short when several
/// labeled fields share one physical line.
pub fn truncate_at_labels<'a>(s: &'a str, labels: &[&str]) -> &'a str {
    let upper = s.to_uppercase();
    let mut cut = s.len();
    for label in labels {
        if let Some(pos) = upper.find(&label.to_uppercase()) {
            // Uppercasing Spanish text is byte-length preserving here; the
            // position is clamped to a char boundary to stay safe.
            let mut pos = pos.min(s.len());
            while pos > 0 && !s.is_char_boundary(pos) {
                pos -= 1;
            }
            cut = cut.min(pos);
        }
    }
    s[..cut].trim_end_matches([':', ' ', '\t'])
}
