use crate::error::PolizaError;
use crate::extraction::{Glyph, GlyphSource, PageGlyphs};
use std::io::Write;
use std::process::Command;

/// Glyph backend using pdftotext (from poppler-utils).
///
/// `pdftotext -bbox-layout` reports one box per word; each word becomes a
/// glyph anchored at its left edge. Poppler's y axis grows downward, so the
/// coordinate is flipped against the page height to match the upward-growing
/// convention of [`Glyph`].
pub struct PdftotextGlyphSource;

impl PdftotextGlyphSource {
    pub fn new() -> Self {
        PdftotextGlyphSource
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextGlyphSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphSource for PdftotextGlyphSource {
    fn extract_glyphs(&self, pdf_bytes: &[u8]) -> Result<Vec<PageGlyphs>, PolizaError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PolizaError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PolizaError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PolizaError::PdftotextNotFound
                } else {
                    PolizaError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PolizaError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        Ok(parse_bbox_pages(&xml))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse poppler's bbox XML into per-page glyph lists, flipping y.
fn parse_bbox_pages(xml: &str) -> Vec<PageGlyphs> {
    let mut pages: Vec<PageGlyphs> = Vec::new();
    let mut page_height = 0.0f32;

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page") {
            let number = parse_attr_usize(line, "number").unwrap_or(pages.len() + 1);
            page_height = parse_attr_f32(line, "height").unwrap_or(0.0);
            pages.push(PageGlyphs {
                page_number: number,
                glyphs: Vec::new(),
            });
            continue;
        }

        if line.starts_with("<word ") {
            let Some(page) = pages.last_mut() else {
                continue;
            };
            let (Some(x), Some(y_top), Some(text)) = (
                parse_attr_f32(line, "xMin"),
                parse_attr_f32(line, "yMin"),
                parse_word_text(line),
            ) else {
                continue;
            };
            let text = decode_xml_entities(&text).trim().to_string();
            if !text.is_empty() {
                page.glyphs.push(Glyph {
                    text,
                    x,
                    y: page_height - y_top,
                });
            }
        }
    }

    pages
}

fn parse_attr_usize(tag: &str, name: &str) -> Option<usize> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox_pages_flips_y() {
        let xml = r#"
<doc>
  <page number="1" width="612.0" height="792.0">
    <line xMin="40.0" yMin="50.0" xMax="120.0" yMax="60.0">
      <word xMin="40.0" yMin="50.0" xMax="80.0" yMax="60.0">Prima</word>
      <word xMin="84.0" yMin="50.0" xMax="110.0" yMax="60.0">Neta</word>
    </line>
  </page>
</doc>
"#;
        let pages = parse_bbox_pages(xml);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].glyphs.len(), 2);
        assert_eq!(pages[0].glyphs[0].text, "Prima");
        // yMin 50 on a 792-high page lands near the top after flipping
        assert_eq!(pages[0].glyphs[0].y, 742.0);
    }

    #[test]
    fn test_parse_bbox_pages_decodes_entities() {
        let xml = r#"
<page number="1" width="612.0" height="792.0">
  <word xMin="10.0" yMin="20.0" xMax="40.0" yMax="30.0">D&amp;G</word>
</page>
"#;
        let pages = parse_bbox_pages(xml);
        assert_eq!(pages[0].glyphs[0].text, "D&G");
    }

    #[test]
    fn test_empty_page_yields_no_glyphs() {
        let xml = r#"<page number="1" width="612.0" height="792.0"></page>"#;
        let pages = parse_bbox_pages(xml);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].glyphs.is_empty());
    }
}
