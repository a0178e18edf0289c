//! Skein Core Library
//!
//! Labeled, weighted directed graphs: construction, lazy traversal,
//! Dijkstra shortest paths and DOT rendering, plus the document,
//! configuration and logging plumbing used by the `skein` CLI.

pub mod config;
pub mod document;
pub mod error;
pub mod graph;
pub mod logging;
