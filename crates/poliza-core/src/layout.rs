use crate::extraction::Glyph;
use std::collections::BTreeMap;

/// A single text token within a reconstructed line.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub x: f32,
}

/// A horizontal line of tokens sharing the same rounded y coordinate.
/// Invariant: tokens are ordered by ascending x.
#[derive(Debug, Clone)]
pub struct Line {
    pub y: i64,
    pub tokens: Vec<Token>,
}

impl Line {
    /// Concatenate token texts with single spaces, in reading order.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Reading-order text reconstructed for one page.
/// Invariant: lines are ordered by descending y (top of page first).
#[derive(Debug, Clone, Default)]
pub struct PageText {
    pub page_number: usize,
    pub lines: Vec<Line>,
    pub raw_text: String,
}

/// Rebuild reading order from positioned glyphs.
///
/// The glyph stream of a PDF page arrives in drawing order, which for
/// multi-column layouts interleaves text from different visual columns.
/// Rounding y to the nearest integer absorbs sub-pixel jitter between
/// glyphs of the same visual line; grouping by rounded y and sorting each
/// group by x restores what a human reads. Lines are ordered by descending
/// y because the PDF y axis grows upward.
///
/// A page with no glyphs reconstructs to an empty `PageText`; other pages
/// may still carry the needed data.
pub fn reconstruct(page_number: usize, glyphs: &[Glyph]) -> PageText {
    let mut rows: BTreeMap<i64, Vec<Token>> = BTreeMap::new();
    for glyph in glyphs {
        let y = glyph.y.round() as i64;
        rows.entry(y).or_default().push(Token {
            text: glyph.text.clone(),
            x: glyph.x,
        });
    }

    let lines: Vec<Line> = rows
        .into_iter()
        .rev()
        .map(|(y, mut tokens)| {
            tokens.sort_by(|a, b| a.x.total_cmp(&b.x));
            Line { y, tokens }
        })
        .collect();

    let raw_text = lines
        .iter()
        .map(|l| l.text())
        .collect::<Vec<_>>()
        .join("\n");

    PageText {
        page_number,
        lines,
        raw_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(text: &str, x: f32, y: f32) -> Glyph {
        Glyph {
            text: text.to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_tokens_sorted_by_x_within_line() {
        let page = reconstruct(
            1,
            &[
                glyph("Neta", 80.0, 700.0),
                glyph("Prima", 40.0, 700.0),
            ],
        );
        assert_eq!(page.lines.len(), 1);
        assert_eq!(page.lines[0].text(), "Prima Neta");
    }

    #[test]
    fn test_lines_sorted_top_to_bottom() {
        let page = reconstruct(
            1,
            &[
                glyph("abajo", 40.0, 100.0),
                glyph("arriba", 40.0, 700.0),
                glyph("medio", 40.0, 400.0),
            ],
        );
        assert_eq!(page.raw_text, "arriba\nmedio\nabajo");
    }

    #[test]
    fn test_subpixel_jitter_absorbed() {
        // 699.6 and 700.4 both round to 700: one visual line
        let page = reconstruct(
            1,
            &[glyph("Prima", 40.0, 700.4), glyph("Neta", 80.0, 699.6)],
        );
        assert_eq!(page.lines.len(), 1);
        assert_eq!(page.lines[0].text(), "Prima Neta");
    }

    #[test]
    fn test_interleaved_columns_restored() {
        // Drawing order alternates between two columns; reading order must not.
        let page = reconstruct(
            1,
            &[
                glyph("Izq1", 40.0, 700.0),
                glyph("Der1", 300.0, 700.0),
                glyph("Der2", 300.0, 680.0),
                glyph("Izq2", 40.0, 680.0),
            ],
        );
        assert_eq!(page.raw_text, "Izq1 Der1\nIzq2 Der2");
    }

    #[test]
    fn test_empty_page() {
        let page = reconstruct(3, &[]);
        assert_eq!(page.page_number, 3);
        assert!(page.lines.is_empty());
        assert!(page.raw_text.is_empty());
    }
}
