use poliza_core::extraction::pdftotext::PdftotextGlyphSource;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), poliza_core::error::PolizaError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let source = PdftotextGlyphSource::new();
    let result = poliza_core::extract_policy(&pdf_bytes, &source)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Registro extraído con {}, escrito en {}",
                result.extractor,
                path.display()
            );
            if !result.alerts.is_empty() {
                eprintln!("  {} campo(s) con alertas", result.alerts.len());
            }
        }
        None => match output_format {
            "json" => output::json::print(&result)?,
            _ => output::table::print(&result),
        },
    }

    Ok(())
}
