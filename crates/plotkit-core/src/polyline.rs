//! Polylines: flattened point sequences with provenance tags.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Point;

/// Provenance tags copied forward from the source shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_id: Option<String>,
}

impl PathTags {
    pub fn is_empty(&self) -> bool {
        self.stroke.is_none() && self.fill.is_none() && self.layer_id.is_none()
    }

    pub fn with_layer(mut self, layer_id: impl Into<String>) -> Self {
        self.layer_id = Some(layer_id.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }
}

/// An ordered sequence of at least two finite points.
///
/// The point count can only change through [`Polyline::replace_points`],
/// which re-checks the invariant. Serialized as a flat coordinate list
/// `[x0, y0, x1, y1, ...]` next to the tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolylineRepr", into = "PolylineRepr")]
pub struct Polyline {
    points: Vec<Point>,
    pub tags: PathTags,
}

#[derive(Serialize, Deserialize)]
struct PolylineRepr {
    points: Vec<f64>,
    #[serde(flatten)]
    tags: PathTags,
}

impl TryFrom<PolylineRepr> for Polyline {
    type Error = GeometryError;

    fn try_from(repr: PolylineRepr) -> Result<Self, Self::Error> {
        Polyline::from_flat(&repr.points, repr.tags)
    }
}

impl From<Polyline> for PolylineRepr {
    fn from(polyline: Polyline) -> Self {
        PolylineRepr {
            points: polyline.to_flat(),
            tags: polyline.tags,
        }
    }
}

impl Polyline {
    /// Creates a polyline, rejecting short or non-finite input.
    pub fn new(points: Vec<Point>, tags: PathTags) -> Result<Self, GeometryError> {
        validate_points(&points)?;
        Ok(Self { points, tags })
    }

    /// Creates an untagged polyline.
    pub fn untagged(points: Vec<Point>) -> Result<Self, GeometryError> {
        Self::new(points, PathTags::default())
    }

    /// Creates a polyline from a flat `[x0, y0, x1, y1, ...]` list.
    pub fn from_flat(coords: &[f64], tags: PathTags) -> Result<Self, GeometryError> {
        if coords.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateCount { len: coords.len() });
        }
        let points = coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();
        Self::new(points, tags)
    }

    /// Flat `[x0, y0, x1, y1, ...]` representation.
    pub fn to_flat(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access to coordinates. The slice cannot change the point count.
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Swaps in a new point list, keeping the old one on failure.
    pub fn replace_points(&mut self, points: Vec<Point>) -> Result<(), GeometryError> {
        validate_points(&points)?;
        self.points = points;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// True when the first and last points coincide exactly.
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }

    /// Sum of the distances between consecutive points.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Reverses the point order in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// A reversed copy; `self` is left untouched.
    pub fn reversed(&self) -> Polyline {
        let mut points = self.points.clone();
        points.reverse();
        Polyline {
            points,
            tags: self.tags.clone(),
        }
    }
}

fn validate_points(points: &[Point]) -> Result<(), GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::TooFewPoints {
            count: points.len(),
        });
    }
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(GeometryError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}
