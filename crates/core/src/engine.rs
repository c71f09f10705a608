//! Collaborator traits for document access and text recognition.
//!
//! The extraction pipeline only ever talks to a document or an OCR backend
//! through these traits; concrete implementations live with the callers
//! (the CLI binds them to lopdf, pdftoppm and tesseract).

use std::path::Path;

use crate::error::Result;

/// An open document, released when the handle is dropped.
pub trait DocumentHandle {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Direct text-layer extraction for one zero-based page index.
    ///
    /// A page without an extractable text layer yields an empty string,
    /// not an error, so the scanned-page gate can fire on it.
    fn extract_text(&self, index: usize) -> Result<String>;

    /// Rasterize one zero-based page to PNG bytes at the given zoom
    /// (1.0 is 72 dpi).
    fn rasterize(&self, index: usize, scale: f64) -> Result<Vec<u8>>;
}

/// Opens documents from the filesystem.
pub trait DocumentEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentHandle>>;
}

/// An optical-character-recognition backend.
///
/// Recognition fails softly: any backend problem yields an empty string,
/// which the text chooser then discards in favor of the direct text.
pub trait RecognitionEngine {
    /// Whether the backend can run at all (binary installed, library
    /// loadable). Callers skip recognition when this is false.
    fn is_available(&self) -> bool;

    /// Recognize text in a PNG image using the given language hint.
    fn recognize(&self, image: &[u8], language: &str) -> String;
}
