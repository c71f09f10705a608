//! Tesseract-backed recognition engine.
//!
//! Shells out to the system `tesseract` binary. Availability is probed once
//! and cached; recognition failures of any kind yield an empty string, per
//! the pipeline policy of keeping direct text when OCR has nothing to add.

use std::io::Write;
use std::process::Command;
use std::sync::OnceLock;

use pagetext_core::engine::RecognitionEngine;
use tracing::debug;

static TESSERACT_AVAILABLE: OnceLock<bool> = OnceLock::new();

pub struct TesseractRecognizer;

impl RecognitionEngine for TesseractRecognizer {
    fn is_available(&self) -> bool {
        *TESSERACT_AVAILABLE.get_or_init(|| {
            let found = Command::new("tesseract").arg("--version").output().is_ok();
            if !found {
                debug!("tesseract not found, OCR fallback disabled");
            }
            found
        })
    }

    fn recognize(&self, image: &[u8], language: &str) -> String {
        match run_tesseract(image, language) {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "tesseract run failed");
                String::new()
            }
        }
    }
}

fn run_tesseract(image: &[u8], language: &str) -> std::io::Result<String> {
    let mut img_file = tempfile::Builder::new().suffix(".png").tempfile()?;
    img_file.write_all(image)?;
    img_file.flush()?;

    let output = Command::new("tesseract")
        .arg(img_file.path())
        .arg("stdout")
        .arg("-l")
        .arg(language)
        .arg("--psm")
        .arg("1")
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(stderr = %stderr, "tesseract exited with failure");
        return Ok(String::new());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
