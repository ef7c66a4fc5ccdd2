//! Tag-based path selection.

use plotkit_core::{PathTags, Polyline};
use serde::{Deserialize, Serialize};

/// Substring filters over path tags. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub layer_id: Option<String>,
    pub stroke: Option<String>,
    pub fill: Option<String>,
}

impl SelectionConfig {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.layer_id.is_none() && self.stroke.is_none() && self.fill.is_none()
    }

    /// True when every set filter is a substring of the matching tag.
    ///
    /// A path without the tag a filter looks at never matches it.
    pub fn matches(&self, tags: &PathTags) -> bool {
        contains(&tags.layer_id, &self.layer_id)
            && contains(&tags.stroke, &self.stroke)
            && contains(&tags.fill, &self.fill)
    }
}

fn contains(tag: &Option<String>, filter: &Option<String>) -> bool {
    match (filter, tag) {
        (None, _) => true,
        (Some(filter), Some(tag)) => tag.contains(filter.as_str()),
        (Some(_), None) => false,
    }
}

/// Keeps the paths matching `selection`, preserving order.
pub fn filter_paths(paths: Vec<Polyline>, selection: &SelectionConfig) -> Vec<Polyline> {
    if selection.is_empty() {
        return paths;
    }
    paths
        .into_iter()
        .filter(|path| selection.matches(&path.tags))
        .collect()
}
