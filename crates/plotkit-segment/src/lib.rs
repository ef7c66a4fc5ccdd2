//! # PlotKit Segment
//!
//! Converts shapes carrying normalized path data into polylines.
//! Straight segments are copied through and cubic Bézier curves are
//! flattened adaptively.
//!
//! ## Modules
//!
//! - [`command`] - Path data tokenizer and parser for `M`, `L`, `C`, `Z`
//! - [`flatten`] - Adaptive cubic flattening
//! - [`shape`] - Input shapes and the shape converter seam
//! - [`segmenter`] - Command stream to polyline assembly

pub mod command;
pub mod flatten;
pub mod segmenter;
pub mod shape;

pub use command::{parse_path_data, PathCommand};
pub use flatten::{CurveFlattener, FlattenConfig, MAX_RECURSION};
pub use segmenter::Segmenter;
pub use shape::{PathDataConverter, Shape, ShapeConverter, PATH_TAG};
