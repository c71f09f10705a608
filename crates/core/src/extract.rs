//! Per-page text extraction with OCR fallback for scanned pages.

use tracing::{debug, warn};

use crate::engine::{DocumentHandle, RecognitionEngine};
use crate::error::Result;
use crate::fallback::{choose_text, is_scanned};

/// Options for text extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Zero-based page indices to extract, ascending. None means all pages.
    pub pages: Option<Vec<usize>>,

    /// Whether to attempt OCR on pages that look scanned.
    pub recognize_scanned: bool,

    /// Language hint passed to the recognition backend.
    pub language: String,

    /// Render zoom for OCR rasterization (2.0 is roughly 144 dpi).
    pub scale: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            pages: None,
            recognize_scanned: true,
            language: "eng".to_string(),
            scale: 2.0,
        }
    }
}

/// Extract the text of each selected page, in ascending page order.
///
/// For every page the direct text layer is extracted first. When it looks
/// scanned and OCR is enabled and a recognizer is available, the page is
/// rasterized and recognized, and the better of the two texts is kept. A
/// rasterization failure degrades to the direct text rather than aborting.
pub fn extract_page_texts(
    doc: &dyn DocumentHandle,
    recognizer: Option<&dyn RecognitionEngine>,
    options: &ExtractOptions,
) -> Result<Vec<String>> {
    let indices: Vec<usize> = match &options.pages {
        Some(pages) => pages.clone(),
        None => (0..doc.page_count()).collect(),
    };

    let recognizer = match recognizer {
        Some(r) if options.recognize_scanned && r.is_available() => Some(r),
        Some(_) | None => None,
    };

    let mut texts = Vec::with_capacity(indices.len());
    for index in indices {
        let direct = doc.extract_text(index)?;
        let text = if is_scanned(&direct) {
            debug!(page = index, "page looks scanned");
            match recognizer {
                Some(r) => match doc.rasterize(index, options.scale) {
                    Ok(image) => {
                        let recognized = r.recognize(&image, &options.language);
                        debug!(
                            page = index,
                            direct_chars = direct.trim().chars().count(),
                            recognized_chars = recognized.trim().chars().count(),
                            "comparing OCR result against direct text"
                        );
                        choose_text(&direct, Some(&recognized)).to_string()
                    }
                    Err(e) => {
                        warn!(page = index, error = %e, "rasterization failed, keeping direct text");
                        direct
                    }
                },
                None => direct,
            }
        } else {
            direct
        };
        texts.push(text);
    }
    Ok(texts)
}

/// Extract the full text of the selected pages, joined with blank lines.
pub fn extract_full_text(
    doc: &dyn DocumentHandle,
    recognizer: Option<&dyn RecognitionEngine>,
    options: &ExtractOptions,
) -> Result<String> {
    Ok(extract_page_texts(doc, recognizer, options)?.join("\n\n"))
}
