//! # PlotKit Optimize
//!
//! Prepares a polyline collection for plotting. Stages run in a fixed
//! order through an [`OptimizerPipeline`]:
//!
//! 1. Selection - keep polylines whose tags match the configured filters
//! 2. Round - quantize coordinates
//! 3. Simplify - merge near-duplicate points, drop tiny polylines
//! 4. Sort - greedy nearest-endpoint ordering with optional reversal
//!
//! Each stage is also available as a free function.

pub mod config;
pub mod filter;
pub mod pipeline;
pub mod processors;
pub mod round;
pub mod simplify;
pub mod sort;
pub mod spatial;

pub use config::{OptimizerConfig, RoundConfig, SimplifyConfig, SortConfig, MAX_PRECISION};
pub use filter::{filter_paths, SelectionConfig};
pub use pipeline::{OptimizerPipeline, PathProcessor, ProcessorHandle};
pub use processors::{RoundProcessor, SelectionProcessor, SimplifyProcessor, SortProcessor};
pub use round::{quantize, round_paths};
pub use simplify::{simplify_paths, simplify_polyline};
pub use sort::{sort_order, sort_owned, sort_paths, SortStep};
pub use spatial::{
    endpoint_records, EndpointIndex, EndpointRecord, IndexKind, KdTreeIndex, RTreeIndex,
};
