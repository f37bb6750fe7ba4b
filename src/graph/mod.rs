// src/graph/mod.rs
pub mod builder;
pub mod pagerank;
pub mod stats;

pub use builder::LinkGraph;

/// A corpus page identifier (the `NNN` in `NNN.html`).
pub type PageId = u32;
