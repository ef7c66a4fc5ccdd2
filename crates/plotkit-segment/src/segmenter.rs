//! Path segmentation: normalized path data to polylines.

use plotkit_core::{PathTags, Point, Polyline, SegmentError};
use tracing::{debug, trace};

use crate::command::{parse_path_data, PathCommand};
use crate::flatten::{CurveFlattener, FlattenConfig};
use crate::shape::{Shape, ShapeConverter};

/// Converts shapes into tagged polylines.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    flattener: CurveFlattener,
}

impl Segmenter {
    /// Creates a segmenter, validating the flattening tolerances.
    pub fn new(config: FlattenConfig) -> Result<Self, SegmentError> {
        Ok(Self {
            flattener: CurveFlattener::new(config)?,
        })
    }

    pub fn config(&self) -> &FlattenConfig {
        self.flattener.config()
    }

    /// Parses and segments one path data string.
    pub fn segment_path(&self, data: &str, tags: &PathTags) -> Result<Vec<Polyline>, SegmentError> {
        let commands = parse_path_data(data)?;
        self.segment_commands(&commands, tags)
    }

    /// Segments already parsed commands.
    ///
    /// Each `M` starts a new polyline; `Z` appends the point of the most
    /// recent `M` without starting a new one. Accumulators with fewer than
    /// two points are dropped.
    pub fn segment_commands(
        &self,
        commands: &[PathCommand],
        tags: &PathTags,
    ) -> Result<Vec<Polyline>, SegmentError> {
        let mut polylines = Vec::new();
        let mut points: Vec<Point> = Vec::new();
        let mut close_point: Option<Point> = None;
        let mut current = Point::ORIGIN;

        for command in commands {
            match *command {
                PathCommand::MoveTo(to) => {
                    flush(&mut points, tags, &mut polylines)?;
                    points.push(to);
                    close_point = Some(to);
                    current = to;
                }
                PathCommand::LineTo(to) => {
                    points.push(to);
                    current = to;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    if points.is_empty() {
                        points.push(current);
                    }
                    self.flattener
                        .flatten_into(current, ctrl1, ctrl2, to, &mut points);
                    current = to;
                }
                PathCommand::Close => {
                    if let Some(close) = close_point {
                        points.push(close);
                        current = close;
                    }
                }
            }
        }
        flush(&mut points, tags, &mut polylines)?;

        Ok(polylines)
    }

    /// Segments one shape through `converter`.
    pub fn segment_shape(
        &self,
        shape: &Shape,
        converter: &dyn ShapeConverter,
    ) -> Result<Vec<Polyline>, SegmentError> {
        let data = converter.path_data(shape)?;
        let polylines = self.segment_path(&data, &shape.tags)?;
        trace!("Shape '{}' produced {} polylines", shape.tag, polylines.len());
        Ok(polylines)
    }

    /// Segments every shape, concatenating the polylines in input order.
    ///
    /// The first failing shape aborts the whole call.
    pub fn segment_shapes(
        &self,
        shapes: &[Shape],
        converter: &dyn ShapeConverter,
    ) -> Result<Vec<Polyline>, SegmentError> {
        let mut polylines = Vec::new();
        for shape in shapes {
            polylines.extend(self.segment_shape(shape, converter)?);
        }
        debug!(
            "Segmented {} shapes into {} polylines",
            shapes.len(),
            polylines.len()
        );
        Ok(polylines)
    }
}

fn flush(
    points: &mut Vec<Point>,
    tags: &PathTags,
    out: &mut Vec<Polyline>,
) -> Result<(), SegmentError> {
    if points.len() >= 2 {
        out.push(Polyline::new(std::mem::take(points), tags.clone())?);
    } else {
        points.clear();
    }
    Ok(())
}
