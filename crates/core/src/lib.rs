//! pagetext - selective PDF text extraction with OCR fallback for scanned pages.

pub mod engine;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod pagespec;

pub use engine::{DocumentEngine, DocumentHandle, RecognitionEngine};
pub use error::{PdfTextError, Result};
pub use extract::{ExtractOptions, extract_full_text, extract_page_texts};
pub use fallback::{SCANNED_TEXT_THRESHOLD, choose_text, is_scanned};
pub use pagespec::{parse_page_spec, resolve_page_spec};
