#[derive(Debug, thiserror::Error)]
pub enum PolizaError {
    #[error("glyph extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no text content found in any page of the document")]
    NoTextContent,

    #[error("could not identify insurer and product from the first page")]
    UnknownDocument,

    #[error("no extractor registered for {insurer} / {product}")]
    NoExtractorAvailable { insurer: String, product: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
