// tests/unit_extract.rs
//! Tests for anchor extraction from raw corpus markup.

use linkrank_core::extract::extract_links;

#[test]
fn test_basic_extraction() {
    let text = r#"<html><body><a HREF="3.html">three</a> <a HREF="17.html">seventeen</a></body></html>"#;
    assert_eq!(extract_links(text), vec![3, 17]);
}

#[test]
fn test_order_and_duplicates_preserved() {
    let text = r#"<a HREF="5.html">a</a><a HREF="1.html">b</a><a HREF="5.html">c</a>"#;
    assert_eq!(extract_links(text), vec![5, 1, 5]);
}

#[test]
fn test_lowercase_href_ignored() {
    // The corpus generator emits HREF in upper case; the match is exact.
    let text = r#"<a href="3.html">three</a>"#;
    assert!(extract_links(text).is_empty());
}

#[test]
fn test_non_numeric_target_ignored() {
    let text = r#"<a HREF="index.html">home</a><a HREF="2.html">two</a>"#;
    assert_eq!(extract_links(text), vec![2]);
}

#[test]
fn test_extra_attributes_do_not_match() {
    let text = r#"<a HREF="3.html" class="nav">three</a>"#;
    assert!(extract_links(text).is_empty());
}

#[test]
fn test_empty_input() {
    assert!(extract_links("").is_empty());
    assert!(extract_links("no links here").is_empty());
}

#[test]
fn test_oversized_identifier_skipped() {
    // A digit run that does not fit a page id is treated as non-matching.
    let text = r#"<a HREF="99999999999999999999.html">big</a><a HREF="4.html">four</a>"#;
    assert_eq!(extract_links(text), vec![4]);
}

#[test]
fn test_arbitrary_garbage_does_not_panic() {
    let text = "<<<a HREF=\"\x01\u{fffd}.html\">>> <a HREF=";
    assert!(extract_links(text).is_empty());
}
