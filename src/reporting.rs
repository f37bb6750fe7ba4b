// src/reporting.rs
//! Console and JSON rendering of an analysis report.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::graph::pagerank::RankScores;
use crate::graph::stats::{DegreeSummary, LinkStats};
use crate::graph::{LinkGraph, PageId};

/// Everything the caller gets back from one analysis run.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub total_pages: usize,
    pub dangling_pages: usize,
    pub stats: LinkStats,
    pub iterations: usize,
    pub converged: bool,
    pub rank_sum: f64,
    pub top_pages: Vec<TopPage>,
}

#[derive(Debug, Serialize)]
pub struct TopPage {
    pub page: PageId,
    pub rank: f64,
}

impl AnalysisReport {
    #[must_use]
    pub fn new(graph: &LinkGraph, stats: LinkStats, scores: &RankScores, top: usize) -> Self {
        let top_pages = scores
            .top_n(top)
            .into_iter()
            .map(|(page, rank)| TopPage { page, rank })
            .collect();

        Self {
            total_pages: graph.page_count(),
            dangling_pages: graph.dangling_pages().len(),
            stats,
            iterations: scores.iterations,
            converged: scores.converged,
            rank_sum: scores.sum(),
            top_pages,
        }
    }
}

/// Prints the formatted report to stdout.
pub fn print_report(report: &AnalysisReport) {
    print_heading("LINK STATISTICS");
    print_summary("Outgoing Links", &report.stats.outgoing);
    print_summary("Incoming Links", &report.stats.incoming);

    print_heading("PAGERANK RESULTS");
    println!();
    println!("Total pages: {}", report.total_pages);
    println!("Dangling pages: {}", report.dangling_pages);
    println!("Iterations performed: {}", report.iterations);
    let status = if report.converged {
        "converged".green().bold()
    } else {
        "iteration ceiling reached".yellow().bold()
    };
    println!("Termination: {status}");
    println!("Sum of all ranks: {:.6}", report.rank_sum);

    println!();
    println!("Top {} Pages by PageRank:", report.top_pages.len());
    for (i, entry) in report.top_pages.iter().enumerate() {
        println!(
            "  {}. Page {}: {:.6}",
            i + 1,
            format!("{}.html", entry.page).cyan(),
            entry.rank
        );
    }
}

/// Prints the report as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(report: &AnalysisReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_heading(title: &str) {
    println!();
    println!("{}", "=".repeat(60).blue());
    println!("{}", title.bold());
    println!("{}", "=".repeat(60).blue());
}

fn print_summary(label: &str, summary: &DegreeSummary) {
    println!();
    println!("{}:", label.bold());
    println!("  Average: {:.2}", summary.mean);
    println!("  Median: {:.2}", summary.median);
    println!("  Max: {}", summary.max);
    println!("  Min: {}", summary.min);
    let cuts: Vec<String> = summary.quintiles.iter().map(|q| format!("{q:.2}")).collect();
    println!("  Quintiles: [{}]", cuts.join(", "));
}
