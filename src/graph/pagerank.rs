// src/graph/pagerank.rs
//! Synchronous power-iteration PageRank with dangling-mass redistribution.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use super::{LinkGraph, PageId};
use crate::config::RankParams;
use crate::error::{RankError, Result};

/// Outcome of a PageRank run.
#[derive(Debug, Clone, Serialize)]
pub struct RankScores {
    /// Final rank per corpus page. Values sum to ~1.0 modulo floating-point
    /// drift; no final renormalization is applied.
    pub ranks: BTreeMap<PageId, f64>,
    /// Iterations actually performed.
    pub iterations: usize,
    /// False if the tolerance was never met within the iteration ceiling.
    pub converged: bool,
}

impl RankScores {
    /// Pages sorted by descending rank, ties broken by ascending id.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(PageId, f64)> {
        let mut ranked: Vec<_> = self.ranks.iter().map(|(&p, &r)| (p, r)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(n);
        ranked
    }

    /// Total rank mass.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.ranks.values().sum()
    }
}

/// Runs PageRank over the graph.
///
/// Each iteration computes, for every page `p`,
///
/// `rank'(p) = (1-d)/n + d*danglingSum/n + d * sum(rank(q)/outdeg(q))`
///
/// over the incoming contributors `q` with at least one outgoing link.
/// Dangling pages give up their whole mass through `danglingSum` instead,
/// so total mass is conserved. The new vector is computed wholesale from
/// the frozen previous one; the per-page updates run in parallel.
///
/// Iteration stops when the relative change in *total* rank mass drops
/// below the tolerance, or at the `max_iterations` ceiling. Non-convergence
/// is reported through the `converged` flag, not as an error.
///
/// # Errors
///
/// Returns `InvalidParameter` for out-of-range parameters and `EmptyCorpus`
/// for an empty page set.
pub fn compute(graph: &LinkGraph, params: &RankParams) -> Result<RankScores> {
    params.validate()?;
    if graph.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let topo = Topology::from_graph(graph);
    let n = topo.pages.len();
    let d = params.damping;

    #[allow(clippy::cast_precision_loss)]
    let n_f = n as f64;
    let mut ranks = vec![1.0 / n_f; n];

    let mut iterations = 0;
    let mut converged = false;

    while iterations < params.max_iterations {
        let dangling_sum: f64 = topo.dangling.iter().map(|&i| ranks[i]).sum();
        let base = (1.0 - d) / n_f + d * dangling_sum / n_f;

        // Every page reads only the frozen previous vector and writes only
        // its own slot, so the per-page updates are independent.
        let new_ranks: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|p| {
                let inbound: f64 = topo.incoming[p]
                    .iter()
                    .map(|&q| {
                        #[allow(clippy::cast_precision_loss)]
                        let out = topo.out_degree[q] as f64;
                        ranks[q] / out
                    })
                    .sum();
                base + d * inbound
            })
            .collect();

        let total_old: f64 = ranks.iter().sum();
        let total_new: f64 = new_ranks.iter().sum();
        let change = (total_new - total_old).abs() / total_old;

        ranks = new_ranks;
        iterations += 1;

        if change < params.tolerance {
            converged = true;
            break;
        }
    }

    let scores = topo
        .pages
        .iter()
        .zip(&ranks)
        .map(|(&page, &rank)| (page, rank))
        .collect();

    Ok(RankScores {
        ranks: scores,
        iterations,
        converged,
    })
}

/// Dense-index view of the graph, built once per run and immutable during
/// the iteration.
struct Topology {
    /// Corpus pages in ascending id order; position is the dense index.
    pages: Vec<PageId>,
    out_degree: Vec<usize>,
    /// Incoming contributors per page, by dense index. Only sources with
    /// out-degree > 0 appear; dangling mass flows through `dangling`.
    incoming: Vec<Vec<usize>>,
    /// Dense indices of pages with no outgoing links.
    dangling: Vec<usize>,
}

impl Topology {
    fn from_graph(graph: &LinkGraph) -> Self {
        let pages: Vec<PageId> = graph.pages().collect();
        let index: BTreeMap<PageId, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, &page)| (page, i))
            .collect();

        let out_degree: Vec<usize> = pages.iter().map(|&p| graph.out_degree(p)).collect();
        let mut incoming = vec![Vec::new(); pages.len()];
        let mut dangling = Vec::new();

        for (src, &page) in pages.iter().enumerate() {
            let targets = graph.links_from(page);
            if targets.is_empty() {
                dangling.push(src);
                continue;
            }
            for &target in targets {
                // Phantom targets hold no rank slot.
                if let Some(&dst) = index.get(&target) {
                    incoming[dst].push(src);
                }
            }
        }

        Self {
            pages,
            out_degree,
            incoming,
            dangling,
        }
    }
}
