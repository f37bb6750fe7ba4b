// src/lib.rs
//! Link-graph analysis over a numbered HTML corpus: out/in-degree
//! statistics and PageRank with dangling-mass redistribution.

pub mod config;
pub mod error;
pub mod extract;
pub mod graph;
pub mod reporting;
pub mod source;
