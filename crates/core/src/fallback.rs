//! Scanned-page detection and per-page text choice.
//!
//! A page whose direct text layer carries almost no non-whitespace content
//! is treated as scanned (an image with no embedded text) and becomes a
//! candidate for OCR. Once both texts exist, the longer one after trimming
//! wins, with ties kept on the direct layer so a noisy or empty recognition
//! result never replaces usable text.

/// Minimum non-whitespace character count for a page to count as texted.
pub const SCANNED_TEXT_THRESHOLD: usize = 20;

/// Heuristic for "this page has no usable text layer".
///
/// Counts non-whitespace characters; below [`SCANNED_TEXT_THRESHOLD`] the
/// page is assumed to be a scanned image. This is a proxy, not a guarantee.
pub fn is_scanned(text: &str) -> bool {
    text.chars().filter(|c| !c.is_whitespace()).count() < SCANNED_TEXT_THRESHOLD
}

/// Pick the text that represents a page.
///
/// With no recognized candidate the direct text is kept unconditionally.
/// Otherwise the candidate with the strictly longer trimmed character
/// count wins; equal counts keep the direct text. Lengths are measured in
/// characters, not bytes, so multibyte scripts weigh the same as ASCII.
pub fn choose_text<'a>(direct: &'a str, recognized: Option<&'a str>) -> &'a str {
    match recognized {
        Some(rec) if trimmed_chars(rec) > trimmed_chars(direct) => rec,
        _ => direct,
    }
}

fn trimmed_chars(text: &str) -> usize {
    text.trim().chars().count()
}
