//! Tests for strict page-spec parsing and resolution.

use pagetext_core::error::PdfTextError;
use pagetext_core::pagespec::{parse_page_spec, resolve_page_spec};

#[test]
fn test_single_digit_tokens() {
    for n in 1..=10 {
        let pages = resolve_page_spec(&n.to_string(), 10).unwrap();
        assert_eq!(pages, vec![n - 1]);
    }
}

#[test]
fn test_last_equals_final_page() {
    assert_eq!(resolve_page_spec("last", 10).unwrap(), vec![9]);
    assert_eq!(resolve_page_spec("10", 10).unwrap(), vec![9]);
    assert_eq!(resolve_page_spec("last", 1).unwrap(), vec![0]);
}

#[test]
fn test_last_zero_offset_equals_last() {
    assert_eq!(
        resolve_page_spec("last-0", 7).unwrap(),
        resolve_page_spec("last", 7).unwrap()
    );
}

#[test]
fn test_last_offsets() {
    assert_eq!(resolve_page_spec("last-1", 10).unwrap(), vec![8]);
    assert_eq!(resolve_page_spec("last-9", 10).unwrap(), vec![0]);
}

#[test]
fn test_range_expansion() {
    assert_eq!(resolve_page_spec("2-5", 10).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_range_is_order_independent() {
    assert_eq!(
        resolve_page_spec("5-2", 10).unwrap(),
        resolve_page_spec("2-5", 10).unwrap()
    );
}

#[test]
fn test_all_equals_one_to_last() {
    for total in [1usize, 3, 10] {
        let expected: Vec<usize> = (0..total).collect();
        assert_eq!(resolve_page_spec("all", total).unwrap(), expected);
        assert_eq!(resolve_page_spec("1-last", total).unwrap(), expected);
    }
}

#[test]
fn test_localized_all_synonym() {
    assert_eq!(
        resolve_page_spec("전체", 4).unwrap(),
        resolve_page_spec("all", 4).unwrap()
    );
}

#[test]
fn test_mixed_tokens_union_and_dedup() {
    assert_eq!(
        resolve_page_spec("1-2,last-1,last", 10).unwrap(),
        vec![0, 1, 8, 9]
    );
    // Overlapping tokens dedup into an ascending set.
    assert_eq!(
        resolve_page_spec("3,1-4,2", 10).unwrap(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn test_range_with_last_endpoints() {
    assert_eq!(resolve_page_spec("2-last", 5).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(resolve_page_spec("last-2-last", 10).unwrap(), vec![7, 8, 9]);
}

#[test]
fn test_unicode_dashes_normalize() {
    for dash in ['\u{2010}', '\u{2013}', '\u{2014}', '\u{2212}'] {
        let spec = format!("2{dash}5");
        assert_eq!(resolve_page_spec(&spec, 10).unwrap(), vec![1, 2, 3, 4]);
        let spec = format!("last{dash}1");
        assert_eq!(resolve_page_spec(&spec, 10).unwrap(), vec![8]);
    }
}

#[test]
fn test_whitespace_and_case_insensitive() {
    assert_eq!(resolve_page_spec(" 2 - 5 , LAST ", 10).unwrap(), vec![1, 2, 3, 4, 9]);
    assert_eq!(resolve_page_spec("ALL", 3).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_zero_page_is_out_of_range() {
    assert!(matches!(
        resolve_page_spec("0", 10),
        Err(PdfTextError::PageOutOfRange(_))
    ));
}

#[test]
fn test_page_past_end_is_out_of_range() {
    assert!(matches!(
        resolve_page_spec("11", 10),
        Err(PdfTextError::PageOutOfRange(_))
    ));
}

#[test]
fn test_last_offset_past_start_is_out_of_range() {
    assert!(matches!(
        resolve_page_spec("last-10", 10),
        Err(PdfTextError::PageOutOfRange(_))
    ));
}

#[test]
fn test_endpoint_out_of_range() {
    assert!(matches!(
        resolve_page_spec("1-11", 10),
        Err(PdfTextError::EndpointOutOfRange(_))
    ));
    assert!(matches!(
        resolve_page_spec("last-10-3", 10),
        Err(PdfTextError::EndpointOutOfRange(_))
    ));
}

#[test]
fn test_invalid_tokens() {
    for spec in ["abc", "1-", "-3", "1--2", "1.5", "+2", "all-1", "last-x"] {
        let err = resolve_page_spec(spec, 10).unwrap_err();
        assert!(
            matches!(
                err,
                PdfTextError::InvalidToken(_) | PdfTextError::InvalidLastOffset(_)
            ),
            "spec {spec:?} gave {err:?}"
        );
    }
}

#[test]
fn test_all_is_not_a_range_endpoint() {
    // `all` only exists as a single token; inside a range it is malformed.
    assert!(matches!(
        resolve_page_spec("all-3", 10),
        Err(PdfTextError::InvalidToken(_))
    ));
}

#[test]
fn test_empty_spec_fails_when_called_directly() {
    assert!(matches!(
        resolve_page_spec("", 10),
        Err(PdfTextError::EmptyPageSpec(_))
    ));
    assert!(matches!(
        resolve_page_spec(" , ,, ", 10),
        Err(PdfTextError::EmptyPageSpec(_))
    ));
}

#[test]
fn test_no_silent_fallback_to_all_pages() {
    // A spec that is mostly valid still fails as a whole on one bad token.
    assert!(resolve_page_spec("1-2,bogus", 10).is_err());
    assert!(resolve_page_spec("1,2,0", 10).is_err());
}

#[test]
fn test_idempotent_resolution() {
    let a = resolve_page_spec("1-2,last-1,last", 10).unwrap();
    let b = resolve_page_spec("1-2,last-1,last", 10).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_output_is_ascending_and_unique() {
    let pages = resolve_page_spec("last,1,5-3,2-2", 10).unwrap();
    assert!(pages.windows(2).all(|w| w[0] < w[1]));
    assert!(pages.iter().all(|&p| p < 10));
}

#[test]
fn test_optional_spec_absent_means_all_pages() {
    assert_eq!(parse_page_spec(None, 10).unwrap(), None);
    assert_eq!(parse_page_spec(Some(""), 10).unwrap(), None);
}

#[test]
fn test_optional_spec_delegates_to_strict_parse() {
    assert_eq!(parse_page_spec(Some("2-3"), 10).unwrap(), Some(vec![1, 2]));
    assert!(parse_page_spec(Some("garbage"), 10).is_err());
    assert!(parse_page_spec(Some(" , "), 10).is_err());
}
