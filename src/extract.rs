// src/extract.rs
//! Link extraction from raw corpus markup.
//!
//! The corpus generator emits anchors in exactly one shape,
//! `<a HREF="NNN.html">` with an upper-case attribute name, so extraction
//! is a fixed pattern match rather than HTML parsing.

use regex::Regex;
use std::sync::LazyLock;

use crate::graph::PageId;

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a HREF="(\d+)\.html">"#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Returns the page identifiers referenced by `text`, in first-seen order
/// with duplicates preserved. Non-matching anchors are silently ignored;
/// this never fails.
#[must_use]
pub fn extract_links(text: &str) -> Vec<PageId> {
    ANCHOR_RE
        .captures_iter(text)
        .filter_map(|cap| cap[1].parse::<PageId>().ok())
        .collect()
}
