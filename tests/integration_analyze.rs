// tests/integration_analyze.rs
//! End-to-end: corpus directory on disk through source, graph, statistics
//! and rank computation.

use std::fs;
use std::path::Path;

use linkrank_core::config::RankParams;
use linkrank_core::error::RankError;
use linkrank_core::graph::{pagerank, stats, LinkGraph};
use linkrank_core::reporting::AnalysisReport;
use linkrank_core::source::{DirSource, DocumentSource};
use tempfile::TempDir;

fn write_page(dir: &Path, page: u32, targets: &[u32]) {
    let body: String = targets
        .iter()
        .map(|t| format!("<a HREF=\"{t}.html\">page {t}</a>\n"))
        .collect();
    let text = format!("<html><body>\n{body}</body></html>\n");
    fs::write(dir.join(format!("{page}.html")), text).unwrap();
}

#[test]
fn test_full_pipeline() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), 0, &[1, 2]);
    write_page(dir.path(), 1, &[2]);
    write_page(dir.path(), 2, &[0]);
    write_page(dir.path(), 3, &[2]);

    let corpus = DirSource::new(dir.path()).load().unwrap();
    assert_eq!(corpus.len(), 4);

    let graph = LinkGraph::build(&corpus).unwrap();
    assert_eq!(graph.page_count(), 4);
    assert_eq!(graph.links_from(0), &[1, 2]);

    let link_stats = stats::degree_stats(&graph).unwrap();
    assert_eq!(link_stats.outgoing.max, 2);
    assert_eq!(link_stats.incoming.max, 3);

    let scores = pagerank::compute(&graph, &RankParams::default()).unwrap();
    assert_eq!(scores.top_n(1)[0].0, 2);
    assert!((scores.sum() - 1.0).abs() < 1e-6);

    let report = AnalysisReport::new(&graph, link_stats, &scores, 3);
    assert_eq!(report.total_pages, 4);
    assert_eq!(report.dangling_pages, 0);
    assert_eq!(report.top_pages.len(), 3);
    assert_eq!(report.top_pages[0].page, 2);
}

#[test]
fn test_non_html_entries_ignored() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), 0, &[1]);
    write_page(dir.path(), 1, &[]);
    fs::write(dir.path().join("notes.txt"), "not part of the corpus").unwrap();
    fs::write(dir.path().join("README"), "also not").unwrap();

    let corpus = DirSource::new(dir.path()).load().unwrap();
    assert_eq!(corpus.len(), 2);
}

#[test]
fn test_nested_entries_not_part_of_corpus() {
    // A file in a subdirectory must not shadow a top-level page with the
    // same basename.
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), 0, &[1]);
    write_page(dir.path(), 1, &[]);
    let nested = dir.path().join("archive");
    fs::create_dir(&nested).unwrap();
    write_page(&nested, 0, &[99]);
    write_page(&nested, 7, &[]);

    let corpus = DirSource::new(dir.path()).load().unwrap();
    assert_eq!(corpus.len(), 2);

    let graph = LinkGraph::build(&corpus).unwrap();
    assert_eq!(graph.links_from(0), &[1]);
    assert!(!graph.contains(7));
}

#[test]
fn test_malformed_html_name_surfaces_error() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), 0, &[]);
    fs::write(dir.path().join("landing.html"), "<html></html>").unwrap();

    let corpus = DirSource::new(dir.path()).load().unwrap();
    let err = LinkGraph::build(&corpus).unwrap_err();
    assert!(matches!(err, RankError::MalformedIdentifier { .. }));
}

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let result = DirSource::new(&missing).load();
    assert!(result.is_err());
}

#[test]
fn test_empty_directory_yields_empty_corpus_error_downstream() {
    let dir = TempDir::new().unwrap();
    let corpus = DirSource::new(dir.path()).load().unwrap();
    assert!(corpus.is_empty());

    let graph = LinkGraph::build(&corpus).unwrap();
    let err = stats::degree_stats(&graph).unwrap_err();
    assert!(matches!(err, RankError::EmptyCorpus));
}

#[test]
fn test_json_report_serializes() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), 0, &[1]);
    write_page(dir.path(), 1, &[0]);

    let corpus = DirSource::new(dir.path()).load().unwrap();
    let graph = LinkGraph::build(&corpus).unwrap();
    let link_stats = stats::degree_stats(&graph).unwrap();
    let scores = pagerank::compute(&graph, &RankParams::default()).unwrap();
    let report = AnalysisReport::new(&graph, link_stats, &scores, 5);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_pages"], 2);
    assert!(json["converged"].is_boolean());
    assert!(json["top_pages"].is_array());
}
