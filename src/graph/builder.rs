// src/graph/builder.rs
//! Graph construction: corpus snapshot to directed link graph.

use std::collections::BTreeMap;

use super::PageId;
use crate::error::{RankError, Result};
use crate::extract;

/// The directed link graph over a corpus.
///
/// Keys are the full page set: every corpus page has an adjacency entry,
/// possibly empty. Edge targets are *not* validated against the page set;
/// a partial corpus may link to pages that were never downloaded, and such
/// phantom targets never hold rank themselves.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    outgoing: BTreeMap<PageId, Vec<PageId>>,
}

impl LinkGraph {
    /// Builds the graph from a `name -> text` corpus mapping.
    ///
    /// # Errors
    ///
    /// Returns `MalformedIdentifier` if any entry name is not of the form
    /// `<digits>.html`. No partial graph is returned.
    pub fn build(corpus: &BTreeMap<String, String>) -> Result<Self> {
        let mut outgoing = BTreeMap::new();
        for (name, text) in corpus {
            let page = parse_page_name(name)?;
            outgoing.insert(page, extract::extract_links(text));
        }
        Ok(Self { outgoing })
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.outgoing.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: PageId) -> bool {
        self.outgoing.contains_key(&page)
    }

    /// Pages in ascending identifier order.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.outgoing.keys().copied()
    }

    /// Outgoing edges in first-seen document order. Empty for pages not in
    /// the corpus.
    #[must_use]
    pub fn links_from(&self, page: PageId) -> &[PageId] {
        self.outgoing.get(&page).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn out_degree(&self, page: PageId) -> usize {
        self.links_from(page).len()
    }

    /// Pages with no outgoing links, ascending.
    #[must_use]
    pub fn dangling_pages(&self) -> Vec<PageId> {
        self.outgoing
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(&page, _)| page)
            .collect()
    }

    /// Iterates `(page, outgoing edges)` in ascending page order.
    pub fn iter(&self) -> impl Iterator<Item = (PageId, &[PageId])> {
        self.outgoing
            .iter()
            .map(|(&page, targets)| (page, targets.as_slice()))
    }
}

fn parse_page_name(name: &str) -> Result<PageId> {
    let stem = name.strip_suffix(".html").ok_or_else(|| malformed(name))?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(name));
    }
    stem.parse().map_err(|_| malformed(name))
}

fn malformed(name: &str) -> RankError {
    RankError::MalformedIdentifier {
        name: name.to_string(),
    }
}
