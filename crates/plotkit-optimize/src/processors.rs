//! Standard optimizer stages

use plotkit_core::{OptimizeError, Polyline};

use crate::config::{RoundConfig, SimplifyConfig, SortConfig};
use crate::filter::{filter_paths, SelectionConfig};
use crate::pipeline::PathProcessor;
use crate::round::round_paths;
use crate::simplify::simplify_paths;
use crate::sort::sort_owned;

/// Keeps polylines whose tags match the selection filters
///
/// Enabled only when at least one filter is set.
#[derive(Debug, Clone, Default)]
pub struct SelectionProcessor {
    selection: SelectionConfig,
}

impl SelectionProcessor {
    pub fn new(selection: SelectionConfig) -> Self {
        Self { selection }
    }
}

impl PathProcessor for SelectionProcessor {
    fn name(&self) -> &str {
        "selection"
    }

    fn description(&self) -> &str {
        "Keeps polylines whose layer, stroke and fill tags match the filters"
    }

    fn process(&self, paths: Vec<Polyline>) -> Result<Vec<Polyline>, OptimizeError> {
        Ok(filter_paths(paths, &self.selection))
    }

    fn is_enabled(&self) -> bool {
        !self.selection.is_empty()
    }
}

/// Quantizes coordinates to a fixed number of decimals
#[derive(Debug, Clone, Default)]
pub struct RoundProcessor {
    config: RoundConfig,
}

impl RoundProcessor {
    pub fn new(config: RoundConfig) -> Self {
        Self { config }
    }
}

impl PathProcessor for RoundProcessor {
    fn name(&self) -> &str {
        "round"
    }

    fn description(&self) -> &str {
        "Rounds every coordinate to a fixed decimal precision"
    }

    fn process(&self, mut paths: Vec<Polyline>) -> Result<Vec<Polyline>, OptimizeError> {
        round_paths(&mut paths, self.config.precision);
        Ok(paths)
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

/// Merges near-duplicate points and drops tiny polylines
#[derive(Debug, Clone, Default)]
pub struct SimplifyProcessor {
    config: SimplifyConfig,
}

impl SimplifyProcessor {
    pub fn new(config: SimplifyConfig) -> Self {
        Self { config }
    }
}

impl PathProcessor for SimplifyProcessor {
    fn name(&self) -> &str {
        "simplify"
    }

    fn description(&self) -> &str {
        "Merges points closer than the merge distance and drops tiny polylines"
    }

    fn process(&self, mut paths: Vec<Polyline>) -> Result<Vec<Polyline>, OptimizeError> {
        simplify_paths(&mut paths, &self.config);
        Ok(paths)
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

/// Orders polylines to shorten pen-up travel
#[derive(Debug, Clone, Default)]
pub struct SortProcessor {
    config: SortConfig,
}

impl SortProcessor {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }
}

impl PathProcessor for SortProcessor {
    fn name(&self) -> &str {
        "sort"
    }

    fn description(&self) -> &str {
        "Orders polylines greedily by nearest endpoint, reversing where allowed"
    }

    fn process(&self, paths: Vec<Polyline>) -> Result<Vec<Polyline>, OptimizeError> {
        sort_owned(paths, &self.config)
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}
