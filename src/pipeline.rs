//! End-to-end job: shapes in, ordered polylines and a motion plan out.

use plotkit_core::{PlotStats, Polyline, Result};
use plotkit_optimize::OptimizerPipeline;
use plotkit_planner::{MotionPlan, Planner};
use plotkit_segment::{PathDataConverter, Segmenter, Shape, ShapeConverter};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PipelineConfig;

/// Everything a job produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Polylines in plot order.
    pub paths: Vec<Polyline>,
    pub stats: PlotStats,
    pub plan: MotionPlan,
}

/// Totals of a job without the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub stats: PlotStats,
    pub event_count: usize,
    /// Plan execution time in seconds.
    pub duration: f64,
}

impl PipelineOutput {
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary {
            stats: self.stats,
            event_count: self.plan.events.len(),
            duration: self.plan.duration(),
        }
    }
}

/// Runs a job over shapes that already carry path data.
pub fn run_pipeline(shapes: &[Shape], config: &PipelineConfig) -> Result<PipelineOutput> {
    run_pipeline_with(shapes, config, &PathDataConverter)
}

/// Runs a job, turning shapes into path data with `converter`.
///
/// Segments every shape, then selects, rounds, simplifies and sorts the
/// polylines, and finally plans the motion in the sorted order. Nothing
/// here touches the file system.
pub fn run_pipeline_with(
    shapes: &[Shape],
    config: &PipelineConfig,
    converter: &dyn ShapeConverter,
) -> Result<PipelineOutput> {
    config.validate()?;

    let segmenter = Segmenter::new(config.flatten)?;
    let optimizer = OptimizerPipeline::from_config(&config.selection, &config.optimizer)?;
    let planner = Planner::new(config.planner)?;

    let paths = segmenter.segment_shapes(shapes, converter)?;
    let paths = optimizer.run(paths)?;
    let stats = PlotStats::from_paths(&paths);
    let plan = planner.plan(&paths)?;

    info!(
        "Job finished: {} shapes, {} paths, pen down {:.3}, pen up {:.3}",
        shapes.len(),
        stats.path_count,
        stats.pen_down_distance,
        stats.pen_up_distance
    );

    Ok(PipelineOutput { paths, stats, plan })
}
