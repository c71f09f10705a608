//! Strict page-selector expression parsing.
//!
//! A page spec is a comma-separated list of tokens selecting a subset of a
//! document's pages. Tokens are either singles (`3`, `last`, `last-2`, `all`)
//! or inclusive ranges between two endpoints (`1-4`, `2-last`, `last-3-last`).
//! Page numbers in the spec are one-based; the resolved output is an
//! ascending, deduplicated list of zero-based indices.
//!
//! Parsing is deliberately strict: a malformed or out-of-range token is a
//! hard error naming the token, never a silent fallback to all pages.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::error::{PdfTextError, Result};

static SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:last(?:-\d+)?|\d+|all)$").unwrap());
static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(last(?:-\d+)?|\d+)\s*-\s*(last(?:-\d+)?|\d+)$").unwrap());

/// Unicode dash variants accepted in specs: hyphen, non-breaking hyphen,
/// figure dash, en dash, em dash, horizontal bar, minus sign.
const DASHES: [char; 7] = [
    '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
];

/// A single (non-range) token, resolved against the page count.
enum SingleToken {
    /// Every page in the document.
    All,
    /// One zero-based page index.
    Page(usize),
}

fn normalize_dashes(spec: &str) -> String {
    spec.replace(DASHES, "-")
}

/// Lowercase a token and map localized "all" synonyms onto the literal `all`.
fn normalize_token(tok: &str) -> String {
    let t = tok.to_lowercase();
    if t == "전체" { "all".to_string() } else { t }
}

/// Resolve a single token to a zero-based page index (or all pages).
///
/// `tok` is the normalized token; `orig` is the raw token for error messages.
fn parse_single_token(tok: &str, orig: &str, total_pages: usize) -> Result<SingleToken> {
    if tok == "all" {
        return Ok(SingleToken::All);
    }
    if tok == "last" {
        return total_pages
            .checked_sub(1)
            .map(SingleToken::Page)
            .ok_or_else(|| PdfTextError::PageOutOfRange(orig.to_string()));
    }
    if let Some(off_str) = tok.strip_prefix("last-") {
        if off_str.is_empty() || !off_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PdfTextError::InvalidLastOffset(orig.to_string()));
        }
        let off: usize = off_str
            .parse()
            .map_err(|_| PdfTextError::PageOutOfRange(orig.to_string()))?;
        return total_pages
            .checked_sub(1 + off)
            .map(SingleToken::Page)
            .ok_or_else(|| PdfTextError::PageOutOfRange(orig.to_string()));
    }
    if tok.bytes().all(|b| b.is_ascii_digit()) && !tok.is_empty() {
        let page: usize = tok
            .parse()
            .map_err(|_| PdfTextError::PageOutOfRange(orig.to_string()))?;
        if !(1..=total_pages).contains(&page) {
            return Err(PdfTextError::PageOutOfRange(orig.to_string()));
        }
        return Ok(SingleToken::Page(page - 1));
    }
    Err(PdfTextError::InvalidToken(orig.to_string()))
}

/// Resolve a range endpoint to a one-based page number.
///
/// Endpoints use one-based numbers because ranges are inclusive on both
/// sides; the caller converts to zero-based indices after expansion.
fn parse_endpoint(tok: &str, orig: &str, total_pages: usize) -> Result<usize> {
    if tok == "all" || tok == "last" {
        if total_pages == 0 {
            return Err(PdfTextError::EndpointOutOfRange(orig.to_string()));
        }
        return Ok(total_pages);
    }
    if let Some(off_str) = tok.strip_prefix("last-") {
        if off_str.is_empty() || !off_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PdfTextError::InvalidLastOffset(orig.to_string()));
        }
        let off: usize = off_str
            .parse()
            .map_err(|_| PdfTextError::EndpointOutOfRange(orig.to_string()))?;
        let page = total_pages
            .checked_sub(off)
            .ok_or_else(|| PdfTextError::EndpointOutOfRange(orig.to_string()))?;
        if page == 0 {
            return Err(PdfTextError::EndpointOutOfRange(orig.to_string()));
        }
        return Ok(page);
    }
    if tok.bytes().all(|b| b.is_ascii_digit()) && !tok.is_empty() {
        let page: usize = tok
            .parse()
            .map_err(|_| PdfTextError::EndpointOutOfRange(orig.to_string()))?;
        if !(1..=total_pages).contains(&page) {
            return Err(PdfTextError::EndpointOutOfRange(orig.to_string()));
        }
        return Ok(page);
    }
    Err(PdfTextError::InvalidToken(orig.to_string()))
}

/// Parse a page spec into ascending, deduplicated zero-based page indices.
///
/// Fails on any malformed or out-of-range token. Never returns an empty
/// vector on success.
pub fn resolve_page_spec(spec: &str, total_pages: usize) -> Result<Vec<usize>> {
    let normalized = normalize_dashes(spec);
    let mut wanted: FxHashSet<usize> = FxHashSet::default();
    let mut any_token = false;

    for raw in normalized.split(',') {
        let tok = raw.trim();
        if tok.is_empty() {
            continue;
        }
        any_token = true;
        let tok_l = normalize_token(tok);

        if SINGLE_RE.is_match(&tok_l) {
            match parse_single_token(&tok_l, tok, total_pages)? {
                SingleToken::All => wanted.extend(0..total_pages),
                SingleToken::Page(idx) => {
                    wanted.insert(idx);
                }
            }
            continue;
        }

        if let Some(caps) = RANGE_RE.captures(&tok_l) {
            let a = parse_endpoint(&caps[1], tok, total_pages)?;
            let b = parse_endpoint(&caps[2], tok, total_pages)?;
            let (lo, hi) = if a > b { (b, a) } else { (a, b) };
            wanted.extend(lo - 1..hi);
            continue;
        }

        return Err(PdfTextError::InvalidToken(tok.to_string()));
    }

    if !any_token {
        return Err(PdfTextError::EmptyPageSpec(spec.to_string()));
    }

    let mut pages: Vec<usize> = wanted.into_iter().collect();
    pages.sort_unstable();
    if pages.is_empty() {
        return Err(PdfTextError::EmptyResolution(spec.to_string()));
    }
    Ok(pages)
}

/// Parse an optional page spec as supplied on a command line.
///
/// `None` or an empty string selects all pages, reported as `Ok(None)` so
/// the caller can iterate the document lazily. Anything else goes through
/// [`resolve_page_spec`] with its strict failure semantics.
pub fn parse_page_spec(spec: Option<&str>, total_pages: usize) -> Result<Option<Vec<usize>>> {
    match spec {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => resolve_page_spec(s, total_pages).map(Some),
    }
}
