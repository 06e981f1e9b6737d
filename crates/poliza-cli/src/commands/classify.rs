use poliza_core::classify;
use poliza_core::extraction::pdftotext::PdftotextGlyphSource;
use poliza_core::extraction::GlyphSource;
use poliza_core::registry;
use std::path::PathBuf;

pub fn run(pdf_file: PathBuf) -> Result<(), poliza_core::error::PolizaError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let source = PdftotextGlyphSource::new();
    let page_glyphs = source.extract_glyphs(&pdf_bytes)?;
    let pages = poliza_core::reconstruct_pages(&page_glyphs);
    let page1 = pages.first().map(|p| p.raw_text.as_str()).unwrap_or("");

    match classify::classify(page1) {
        Some(key) => {
            let registered = registry::lookup(key.insurer, key.product).is_some();
            println!("Aseguradora: {}", key.insurer);
            println!("Producto:    {}", key.product);
            println!(
                "Extractor:   {}",
                if registered {
                    "registrado"
                } else {
                    "no disponible (captura manual)"
                }
            );
        }
        None => {
            println!("Documento no reconocido; se requiere captura manual.");
            println!("Pares soportados:");
            for (insurer, product) in registry::supported() {
                println!("  {insurer} / {product}");
            }
        }
    }

    Ok(())
}
