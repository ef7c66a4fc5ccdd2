//! # PlotKit Core
//!
//! Core types shared by every stage of the plotting pipeline.
//! Provides the point and polyline model, provenance tags, plot
//! statistics and the error types for all layers.

pub mod error;
pub mod geometry;
pub mod polyline;
pub mod stats;

pub use error::{Error, GeometryError, OptimizeError, PlanError, Result, SegmentError};
pub use geometry::Point;
pub use polyline::{PathTags, Polyline};
pub use stats::PlotStats;
