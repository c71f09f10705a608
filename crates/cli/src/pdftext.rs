//! pdftext - Extract the full text of a PDF, with page selection and OCR
//! fallback for scanned pages.
//!
//! Writes one UTF-8 text file per run (`<out>/<pdf stem>.txt`); page images
//! and per-page text files are opt-in. Page selection uses a strict spec
//! grammar (`1-2,last-1,last`, `2-last`, `all`) that fails loudly on any
//! malformed or out-of-range token instead of falling back to all pages.

mod engine;
mod ocr;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pagetext_core::extract::{ExtractOptions, extract_page_texts};
use pagetext_core::pagespec::parse_page_spec;

use crate::engine::LopdfEngine;
use crate::ocr::TesseractRecognizer;
use pagetext_core::engine::DocumentEngine;

/// Extract text from a PDF with a robust --pages selector.
#[derive(Parser, Debug)]
#[command(name = "pdftext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a local PDF file
    pdf: PathBuf,

    /// Pages to extract, e.g. "1-2,last-1,last", "2-last", "all" (default: all pages)
    #[arg(long)]
    pages: Option<String>,

    /// Output directory (default: the PDF's parent directory)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Render zoom for OCR rasterization (2.0 is roughly 144 dpi)
    #[arg(long, default_value = "2.0")]
    zoom: f64,

    /// Disable OCR fallback for scanned pages
    #[arg(long = "no-ocr", action = ArgAction::SetTrue)]
    no_ocr: bool,

    /// Tesseract language code, e.g. eng, kor, jpn
    #[arg(long = "ocr-lang", default_value = "eng")]
    ocr_lang: String,

    /// Also save the selected pages as PNG images under <out>/pages/
    #[arg(long = "emit-pages", action = ArgAction::SetTrue)]
    emit_pages: bool,

    /// Resolution for --emit-pages images
    #[arg(long, default_value = "180")]
    dpi: u32,

    /// Also save per-page text files under <out>/text/
    #[arg(long = "emit-per-page-txt", action = ArgAction::SetTrue)]
    emit_per_page_txt: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    if let Err(err) = run(&args) {
        error!(error = %err, "extraction failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if !args.pdf.exists() {
        anyhow::bail!("PDF not found: {}", args.pdf.display());
    }

    let outdir = output_dir(&args.pdf, args.out.as_deref());
    fs::create_dir_all(&outdir)
        .with_context(|| format!("failed to create output directory {}", outdir.display()))?;

    let doc = LopdfEngine.open(&args.pdf)?;
    let total_pages = doc.page_count();
    info!(pdf = %args.pdf.display(), total_pages, "opened document");

    // Strict: a bad --pages spec aborts the run, never extracts everything.
    let selected = parse_page_spec(args.pages.as_deref(), total_pages)?;

    let options = ExtractOptions {
        pages: selected.clone(),
        recognize_scanned: !args.no_ocr,
        language: args.ocr_lang.clone(),
        scale: args.zoom,
    };
    let recognizer = TesseractRecognizer;
    let page_texts = extract_page_texts(doc.as_ref(), Some(&recognizer), &options)?;
    let full_text = page_texts.join("\n\n");

    let stem = args
        .pdf
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let txt_path = outdir.join(format!("{stem}.txt"));
    fs::write(&txt_path, &full_text)
        .with_context(|| format!("failed to write {}", txt_path.display()))?;
    info!(output = %txt_path.display(), pages = page_texts.len(), "wrote full text");

    if let Some(ref selected) = selected {
        if args.emit_pages {
            let pages_dir = outdir.join("pages");
            fs::create_dir_all(&pages_dir)?;
            for &i in selected {
                let png = doc.rasterize(i, f64::from(args.dpi) / 72.0)?;
                let path = pages_dir.join(format!("page_{:04}.png", i + 1));
                fs::write(&path, png)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            info!(dir = %pages_dir.display(), "wrote page images");
        }

        if args.emit_per_page_txt {
            let text_dir = outdir.join("text");
            fs::create_dir_all(&text_dir)?;
            for (&i, text) in selected.iter().zip(&page_texts) {
                let path = text_dir.join(format!("page_{:04}.txt", i + 1));
                fs::write(&path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            info!(dir = %text_dir.display(), "wrote per-page text");
        }
    }

    Ok(())
}

fn output_dir(pdf: &std::path::Path, out: Option<&std::path::Path>) -> PathBuf {
    match out {
        Some(dir) => dir.to_path_buf(),
        None => match pdf.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        },
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
