//! Input shapes and the shape-to-path conversion seam.

use std::borrow::Cow;

use plotkit_core::{PathTags, SegmentError};
use serde::{Deserialize, Serialize};

/// The tag of shapes that already carry normalized path data.
pub const PATH_TAG: &str = "path";

/// One input shape with its transform already applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Element name, e.g. `path` or `circle`.
    pub tag: String,
    /// Normalized path data (`M`, `L`, `C`, `Z`, absolute).
    #[serde(default, rename = "d")]
    pub path_data: String,
    #[serde(flatten)]
    pub tags: PathTags,
}

impl Shape {
    /// A `path` shape with the given data and no tags.
    pub fn path(data: impl Into<String>) -> Self {
        Self {
            tag: PATH_TAG.to_string(),
            path_data: data.into(),
            tags: PathTags::default(),
        }
    }

    pub fn with_tags(mut self, tags: PathTags) -> Self {
        self.tags = tags;
        self
    }
}

/// Turns a shape into normalized path data.
///
/// Implementations handle arcs, shorthand and quadratic curves, relative
/// commands and primitive elements; the segmenter only sees the result.
pub trait ShapeConverter {
    fn path_data<'a>(&self, shape: &'a Shape) -> Result<Cow<'a, str>, SegmentError>;
}

/// Passes through `path` shapes and rejects every other tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathDataConverter;

impl ShapeConverter for PathDataConverter {
    fn path_data<'a>(&self, shape: &'a Shape) -> Result<Cow<'a, str>, SegmentError> {
        if shape.tag == PATH_TAG {
            Ok(Cow::Borrowed(shape.path_data.as_str()))
        } else {
            Err(SegmentError::UnsupportedShape {
                tag: shape.tag.clone(),
            })
        }
    }
}
