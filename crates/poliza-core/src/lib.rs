pub mod classify;
pub mod context;
pub mod directory;
pub mod error;
pub mod extraction;
pub mod extractors;
pub mod gazetteer;
pub mod layout;
pub mod model;
pub mod parsing;
pub mod registry;

use context::ExtractionContext;
use error::PolizaError;
use extraction::{GlyphSource, PageGlyphs};
use layout::PageText;
use model::{ExtractionAlert, PolicyExtractionResult};

/// Main API entry point: extract a structured policy record from PDF bytes.
///
/// Pages are decoded by the glyph source, rebuilt into reading order, then
/// routed to the insurer/product extractor. Only an unsupported document
/// or a document with no extractable text at all fails the call; every
/// field-level problem degrades into an alert on the returned record.
pub fn extract_policy(
    pdf_bytes: &[u8],
    source: &dyn GlyphSource,
) -> Result<PolicyExtractionResult, PolizaError> {
    let page_glyphs = source.extract_glyphs(pdf_bytes)?;
    let pages = reconstruct_pages(&page_glyphs);
    extract_from_pages(&pages)
}

/// Rebuild reading-order page text from per-page glyph records.
pub fn reconstruct_pages(page_glyphs: &[PageGlyphs]) -> Vec<PageText> {
    page_glyphs
        .iter()
        .map(|page| layout::reconstruct(page.page_number, &page.glyphs))
        .collect()
}

/// Classify and extract from already-reconstructed pages.
pub fn extract_from_pages(pages: &[PageText]) -> Result<PolicyExtractionResult, PolizaError> {
    if pages.iter().all(|p| p.raw_text.trim().is_empty()) {
        return Err(PolizaError::NoTextContent);
    }

    let ctx = ExtractionContext::build(pages);
    let key = classify::classify(&ctx.page1_text).ok_or(PolizaError::UnknownDocument)?;
    let extractor = registry::lookup(key.insurer, key.product).ok_or_else(|| {
        PolizaError::NoExtractorAvailable {
            insurer: key.insurer.to_string(),
            product: key.product.to_string(),
        }
    })?;

    tracing::debug!(extractor = extractor.name(), "running extractor");
    let mut result = extractor.extract(&ctx);

    // A page that decoded to nothing lowers confidence for everything
    // normally sourced from it, but does not fail the extraction.
    for page in pages {
        if page.raw_text.trim().is_empty() {
            result.alerts.push(ExtractionAlert::low_confidence(
                "document.pages",
                &format!("page {} had no extractable text", page.page_number),
            ));
        }
    }

    Ok(result)
}
