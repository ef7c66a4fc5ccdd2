//! # PlotKit
//!
//! Prepares vector paths for pen plotters:
//! - Adaptive flattening of cubic Bézier paths into polylines
//! - Selection, rounding and simplification of the polylines
//! - Travel-minimizing ordering with optional path reversal
//! - Acceleration-limited motion planning with cornering limits
//!
//! ## Architecture
//!
//! PlotKit is organized as a workspace with multiple crates:
//!
//! 1. **plotkit-core** - Points, polylines, plot statistics, error types
//! 2. **plotkit-segment** - Path data parsing and curve flattening
//! 3. **plotkit-optimize** - Selection, round, simplify and sort stages
//! 4. **plotkit-planner** - Velocity profiles and the motion plan timeline
//! 5. **plotkit** - Job configuration, the end-to-end pipeline and the CLI

pub mod config;
pub mod pipeline;

pub use plotkit_core::{
    Error, GeometryError, OptimizeError, PathTags, PlanError, PlotStats, Point, Polyline,
    Result, SegmentError,
};

pub use plotkit_segment::{
    parse_path_data, CurveFlattener, FlattenConfig, PathCommand, PathDataConverter, Segmenter,
    Shape, ShapeConverter,
};

pub use plotkit_optimize::{
    filter_paths, round_paths, simplify_paths, sort_owned, sort_paths, IndexKind,
    OptimizerConfig, OptimizerPipeline, PathProcessor, RoundConfig, SelectionConfig,
    SimplifyConfig, SortConfig,
};

pub use plotkit_planner::{
    MotionBlock, MotionPhase, MotionPlan, PlanEvent, PlanInstant, Planner, PlannerConfig,
    ProfileKind,
};

pub use config::PipelineConfig;
pub use pipeline::{run_pipeline, run_pipeline_with, PipelineOutput, PipelineSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for results
/// - RUST_LOG environment variable support, INFO otherwise
/// - Pretty or JSON formatting
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .json();
        registry.with(fmt_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();
        registry.with(fmt_layer).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
