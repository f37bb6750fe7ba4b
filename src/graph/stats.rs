// src/graph/stats.rs
//! Descriptive statistics over the link-degree distributions.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{LinkGraph, PageId};
use crate::error::{RankError, Result};

/// Summary of one degree distribution.
#[derive(Debug, Clone, Serialize)]
pub struct DegreeSummary {
    pub mean: f64,
    pub median: f64,
    pub min: usize,
    pub max: usize,
    /// The four cut points dividing the sorted distribution into five
    /// equal-sized groups, interpolated between order statistics.
    pub quintiles: [f64; 4],
}

/// Out- and in-degree summaries for a corpus.
#[derive(Debug, Clone, Serialize)]
pub struct LinkStats {
    pub outgoing: DegreeSummary,
    pub incoming: DegreeSummary,
}

/// Computes degree statistics for every page in the corpus.
///
/// In-degrees count only edges whose source is a corpus page. Phantom
/// targets accumulate counts in the intermediate index but are not part
/// of the reported distribution.
///
/// # Errors
/// Returns `EmptyCorpus` if the page set is empty.
pub fn degree_stats(graph: &LinkGraph) -> Result<LinkStats> {
    if graph.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let out_degrees: Vec<usize> = graph.pages().map(|p| graph.out_degree(p)).collect();

    let mut incoming: BTreeMap<PageId, usize> = BTreeMap::new();
    for (_, targets) in graph.iter() {
        for &target in targets {
            *incoming.entry(target).or_default() += 1;
        }
    }
    let in_degrees: Vec<usize> = graph
        .pages()
        .map(|p| incoming.get(&p).copied().unwrap_or(0))
        .collect();

    Ok(LinkStats {
        outgoing: summarize(out_degrees),
        incoming: summarize(in_degrees),
    })
}

#[allow(clippy::cast_precision_loss)]
fn summarize(mut degrees: Vec<usize>) -> DegreeSummary {
    degrees.sort_unstable();
    let n = degrees.len();
    let sum: usize = degrees.iter().sum();

    DegreeSummary {
        mean: sum as f64 / n as f64,
        median: median(&degrees),
        min: degrees[0],
        max: degrees[n - 1],
        quintiles: quintiles(&degrees),
    }
}

#[allow(clippy::cast_precision_loss)]
fn median(sorted: &[usize]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0
    }
}

/// Quantile cut points with five divisions, exclusive interpolation:
/// the i-th cut sits at position `i*(n+1)/5` in the sorted data, linearly
/// interpolated between the two surrounding order statistics.
#[allow(clippy::cast_precision_loss)]
fn quintiles(sorted: &[usize]) -> [f64; 4] {
    let n = sorted.len();
    if n == 1 {
        let only = sorted[0] as f64;
        return [only; 4];
    }

    let m = n + 1;
    let mut cuts = [0.0; 4];
    for (idx, cut) in cuts.iter_mut().enumerate() {
        let i = idx + 1;
        let j = (i * m / 5).clamp(1, n - 1);
        let delta = (i * m) % 5;
        let lo = sorted[j - 1] as f64;
        let hi = sorted[j] as f64;
        *cut = (lo * (5 - delta) as f64 + hi * delta as f64) / 5.0;
    }
    cuts
}
