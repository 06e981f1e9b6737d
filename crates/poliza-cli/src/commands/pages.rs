use poliza_core::extraction::pdftotext::PdftotextGlyphSource;
use poliza_core::extraction::GlyphSource;
use std::path::PathBuf;

pub fn run(
    pdf_file: PathBuf,
    only_page: Option<usize>,
) -> Result<(), poliza_core::error::PolizaError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let source = PdftotextGlyphSource::new();
    let page_glyphs = source.extract_glyphs(&pdf_bytes)?;
    let pages = poliza_core::reconstruct_pages(&page_glyphs);

    for page in &pages {
        if let Some(only) = only_page {
            if page.page_number != only {
                continue;
            }
        }
        println!("--- Página {} ---", page.page_number);
        println!("{}", page.raw_text);
        println!();
    }

    Ok(())
}
