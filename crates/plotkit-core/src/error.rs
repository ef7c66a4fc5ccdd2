//! Error handling for PlotKit
//!
//! Provides error types for every stage of the pipeline:
//! - Geometry errors (polyline construction and validation)
//! - Segment errors (path data parsing and curve flattening)
//! - Optimize errors (stage configuration and path ordering)
//! - Plan errors (kinematic configuration and degenerate input)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a point sequence cannot form a valid polyline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polyline needs at least two points
    #[error("Polyline needs at least 2 points, got {count}")]
    TooFewPoints {
        /// The number of points supplied.
        count: usize,
    },

    /// A coordinate is NaN or infinite
    #[error("Non-finite coordinate at point {index}: ({x}, {y})")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
        /// The x coordinate.
        x: f64,
        /// The y coordinate.
        y: f64,
    },

    /// A flat coordinate list has an unpaired value
    #[error("Flat coordinate list has odd length {len}")]
    OddCoordinateCount {
        /// The length of the flat list.
        len: usize,
    },
}

/// Segmenter error type
///
/// Represents errors raised while turning shape path data into polylines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// No path-conversion rule exists for the shape tag
    #[error("Unsupported shape tag: {tag}")]
    UnsupportedShape {
        /// The shape tag that could not be converted.
        tag: String,
    },

    /// A path command outside of M, L, C and Z was found
    #[error("Unsupported path command: {command}")]
    UnsupportedCommand {
        /// The offending command letter.
        command: char,
    },

    /// The path data could not be tokenized or has malformed arguments
    #[error("Malformed path data at offset {offset}: {reason}")]
    MalformedPathData {
        /// Byte offset into the path data.
        offset: usize,
        /// What was wrong.
        reason: String,
    },

    /// A flattening parameter is out of range
    #[error("Invalid flattening parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Flattening produced an invalid polyline
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Optimizer error type
///
/// Represents errors raised by the round, simplify and sort stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// The spatial index ran dry while polylines were still unvisited
    #[error("Sort consistency violated: index empty with {remaining} polylines unvisited")]
    SortConsistency {
        /// Number of polylines not yet emitted.
        remaining: usize,
    },

    /// An optimizer parameter is out of range
    #[error("Invalid optimizer parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A stage produced an invalid polyline
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Motion planner error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A kinematic parameter is out of range
    #[error("Invalid planner parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Geometry that would produce NaN in the kinematic math
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// Description of the degenerate input.
        reason: String,
    },
}

/// Main error type for PlotKit
///
/// A unified error type that can represent any error from all stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Segmenter error
    #[error(transparent)]
    Segment(#[from] SegmentError),

    /// Optimizer error
    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    /// Planner error
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl Error {
    /// Check if this error is a configuration problem rather than bad input
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Error::Segment(SegmentError::InvalidParameter { .. })
                | Error::Optimize(OptimizeError::InvalidParameter { .. })
                | Error::Plan(PlanError::InvalidParameter { .. })
        )
    }

    /// Check if this error signals a broken internal invariant
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Optimize(OptimizeError::SortConsistency { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
