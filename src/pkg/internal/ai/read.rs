use std::io::Cursor;

use crate::prelude::*;

/// Capability seam for text extraction, mirrors `GenerateOps`.
pub trait ExtractOps: Send + Sync {
    fn extract(&self, data: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl ExtractOps for PdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<String> {
        extract_text_from_pdf(data)
    }
}

fn extract_text_from_pdf(data: &[u8]) -> Result<String> {
    use lopdf::Document;
    let cursor = Cursor::new(data);
    let doc = Document::load_from(cursor)
        .map_err(|e| Error::Extraction(format!("could not parse PDF: {e}")))?;

    let pages = doc.get_pages();
    let mut text = String::new();

    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push(' ');
            }
            Err(e) => {
                tracing::warn!("failed to extract text from page {}: {}", page_num, e);
            }
        }
    }

    // scanned-image PDFs land here: parseable but no extractable text
    if text.trim().is_empty() {
        return Err(Error::Extraction(
            "Could not extract text from PDF. It might be empty or scanned images.".into(),
        ));
    }
    Ok(text.trim().to_string())
}
