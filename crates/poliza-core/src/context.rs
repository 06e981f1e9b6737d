use crate::layout::PageText;

/// Read-only text bundle handed to extractors, built once per document and
/// shared by every extraction step for that document.
#[derive(Debug, Clone, Default)]
pub struct ExtractionContext {
    pub pages: Vec<PageText>,
    /// All pages joined with newlines, in page order.
    pub document_text: String,
    pub page1_text: String,
    /// Face-page ("carátula") text; empty when no page matched the probe.
    pub caratula_text: String,
    /// Billing-notice ("aviso de cobro") text; empty when none matched.
    pub aviso_text: String,
}

const CARATULA_PROBES: &[&str] = &[
    "CARÁTULA",
    "CARATULA",
    "COBERTURAS AMPARADAS",
    "COBERTURAS CONTRATADAS",
];

const AVISO_PROBES: &[&str] = &["AVISO DE COBRO", "RECIBO DE PRIMA", "COMPROBANTE DE PAGO"];

impl ExtractionContext {
    pub fn build(pages: &[PageText]) -> Self {
        let document_text = pages
            .iter()
            .map(|p| p.raw_text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let page1_text = pages.first().map(|p| p.raw_text.clone()).unwrap_or_default();
        let caratula_text = find_page(pages, CARATULA_PROBES);
        let aviso_text = find_page(pages, AVISO_PROBES);

        ExtractionContext {
            pages: pages.to_vec(),
            document_text,
            page1_text,
            caratula_text,
            aviso_text,
        }
    }
}

/// First page whose text contains any probe (case-insensitive), as raw text.
fn find_page(pages: &[PageText], probes: &[&str]) -> String {
    for page in pages {
        let upper = page.raw_text.to_uppercase();
        if probes.iter().any(|p| upper.contains(p)) {
            return page.raw_text.clone();
        }
    }
    String::new()
}
