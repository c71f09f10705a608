//! lopdf-backed document engine with pdftoppm rasterization.
//!
//! Text layers come straight from lopdf. Rasterization shells out to
//! `pdftoppm` (poppler-utils) because lopdf does not render; a missing
//! binary surfaces as a render error, which the extraction pipeline
//! degrades to the direct text.

use std::path::{Path, PathBuf};
use std::process::Command;

use pagetext_core::engine::{DocumentEngine, DocumentHandle};
use pagetext_core::error::{PdfTextError, Result};
use tracing::debug;

pub struct LopdfEngine;

impl DocumentEngine for LopdfEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentHandle>> {
        let doc = lopdf::Document::load(path)
            .map_err(|e| PdfTextError::Document(format!("{}: {e}", path.display())))?;
        Ok(Box::new(LopdfDocument {
            doc,
            path: path.to_path_buf(),
        }))
    }
}

pub struct LopdfDocument {
    doc: lopdf::Document,
    // Kept for pdftoppm, which renders from the file, not from memory.
    path: PathBuf,
}

impl DocumentHandle for LopdfDocument {
    fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    fn extract_text(&self, index: usize) -> Result<String> {
        let pageno = index as u32 + 1;
        // Pages without an extractable text layer (scanned images, unusual
        // encodings) come back as errors from lopdf; report them as empty
        // so the scanned-page gate fires instead of aborting the run.
        match self.doc.extract_text(&[pageno]) {
            Ok(text) => Ok(text),
            Err(e) => {
                debug!(page = index, error = %e, "no extractable text layer");
                Ok(String::new())
            }
        }
    }

    fn rasterize(&self, index: usize, scale: f64) -> Result<Vec<u8>> {
        let dpi = (72.0 * scale).round().max(1.0) as u32;
        let pageno = index + 1;

        let tmp = tempfile::tempdir()?;
        let prefix = tmp.path().join("page");
        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(dpi.to_string())
            .arg("-f")
            .arg(pageno.to_string())
            .arg("-l")
            .arg(pageno.to_string())
            .arg(&self.path)
            .arg(&prefix)
            .output()
            .map_err(|e| PdfTextError::Render(format!("failed to run pdftoppm: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PdfTextError::Render(format!("pdftoppm failed: {stderr}")));
        }

        // pdftoppm pads the page number in the output name; with -f/-l
        // there is exactly one PNG in the directory.
        let mut pngs: Vec<PathBuf> = std::fs::read_dir(tmp.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
            .collect();
        pngs.sort();

        let png = pngs
            .first()
            .ok_or_else(|| PdfTextError::Render("pdftoppm produced no image".to_string()))?;
        Ok(std::fs::read(png)?)
    }
}
