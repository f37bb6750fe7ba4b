// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use linkrank_core::config::{
    RankParams, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use linkrank_core::graph::{pagerank, stats, LinkGraph};
use linkrank_core::reporting::{self, AnalysisReport};
use linkrank_core::source::{DirSource, DocumentSource};

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(about = "Link statistics and PageRank over a numbered HTML corpus")]
#[command(version)]
struct Cli {
    /// Directory holding the corpus (<digits>.html files)
    corpus: PathBuf,

    /// Damping factor, in (0, 1)
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Convergence tolerance on total rank mass
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Iteration ceiling
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Worker threads for corpus loading and rank updates (0 = auto)
    #[arg(long, default_value_t = 0)]
    workers: usize,

    /// How many top-ranked pages to report
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Emit the report as JSON instead of the console format
    #[arg(long)]
    json: bool,

    /// Enable progress logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.workers > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.workers)
            .build_global()?;
    }

    let started = Instant::now();

    if cli.verbose {
        println!("Loading corpus from {}...", cli.corpus.display());
    }
    let corpus = DirSource::new(&cli.corpus).load()?;
    if cli.verbose {
        println!("Loaded {} documents", corpus.len());
    }

    let graph = LinkGraph::build(&corpus)?;
    if cli.verbose {
        println!(
            "Built graph: {} pages, {} dangling",
            graph.page_count(),
            graph.dangling_pages().len()
        );
    }

    let link_stats = stats::degree_stats(&graph)?;

    let params = RankParams {
        damping: cli.damping,
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
    };
    let scores = pagerank::compute(&graph, &params)?;

    let report = AnalysisReport::new(&graph, link_stats, &scores, cli.top);
    if cli.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report);
    }

    if cli.verbose {
        println!();
        println!(
            "Total execution time: {:.2}s",
            started.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
