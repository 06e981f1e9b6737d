pub mod pdftotext;

use crate::error::PolizaError;

/// A single positioned text run as reported by the PDF text layer.
///
/// `y` follows the PDF convention and grows upward: a larger `y` means
/// higher on the page.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Glyphs extracted from a single page.
#[derive(Debug, Clone)]
pub struct PageGlyphs {
    pub page_number: usize,
    pub glyphs: Vec<Glyph>,
}

/// Trait for PDF text-layer backends.
pub trait GlyphSource: Send + Sync {
    /// Extract positioned glyphs from PDF bytes, one record per page.
    ///
    /// A page without a text layer yields an empty glyph list, not an error.
    fn extract_glyphs(&self, pdf_bytes: &[u8]) -> Result<Vec<PageGlyphs>, PolizaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
