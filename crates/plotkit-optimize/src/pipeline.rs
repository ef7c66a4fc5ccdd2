//! Optimizer stage pipeline and registry

use std::sync::Arc;

use plotkit_core::{OptimizeError, Polyline};
use tracing::{debug, warn};

use crate::config::OptimizerConfig;
use crate::filter::SelectionConfig;
use crate::processors::{RoundProcessor, SelectionProcessor, SimplifyProcessor, SortProcessor};

/// Trait for path collection processors
///
/// A processor consumes the whole collection and returns the transformed
/// collection. Processors may drop, reorder or rewrite polylines, but every
/// returned polyline must still hold at least two points.
pub trait PathProcessor: Send + Sync {
    /// Get the name/identifier of this processor
    fn name(&self) -> &str;

    /// Get a description of what this processor does
    fn description(&self) -> &str;

    /// Process the path collection
    fn process(&self, paths: Vec<Polyline>) -> Result<Vec<Polyline>, OptimizeError>;

    /// Check if this processor is enabled
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Arc-wrapped processor for thread-safe sharing
pub type ProcessorHandle = Arc<dyn PathProcessor>;

/// Path processor pipeline
///
/// Applies registered processors in registration order, skipping the
/// disabled ones.
#[derive(Default)]
pub struct OptimizerPipeline {
    processors: Vec<ProcessorHandle>,
}

impl OptimizerPipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard selection, round, simplify and sort pipeline
    pub fn from_config(
        selection: &SelectionConfig,
        config: &OptimizerConfig,
    ) -> Result<Self, OptimizeError> {
        config.validate()?;

        let mut pipeline = Self::new();
        pipeline
            .register(Arc::new(SelectionProcessor::new(selection.clone())))
            .register(Arc::new(RoundProcessor::new(config.round)))
            .register(Arc::new(SimplifyProcessor::new(config.simplify)))
            .register(Arc::new(SortProcessor::new(config.sort)));
        Ok(pipeline)
    }

    /// Register a processor in the pipeline
    pub fn register(&mut self, processor: ProcessorHandle) -> &mut Self {
        self.processors.push(processor);
        self
    }

    /// Get the number of registered processors
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Get a reference to a processor by name
    pub fn get_processor_by_name(&self, name: &str) -> Option<&ProcessorHandle> {
        self.processors.iter().find(|p| p.name() == name)
    }

    /// List all registered processors
    pub fn list_processors(&self) -> Vec<(&str, &str, bool)> {
        self.processors
            .iter()
            .map(|p| (p.name(), p.description(), p.is_enabled()))
            .collect()
    }

    /// Run the collection through every enabled processor
    pub fn run(&self, paths: Vec<Polyline>) -> Result<Vec<Polyline>, OptimizeError> {
        let mut current = paths;

        for processor in &self.processors {
            if !processor.is_enabled() {
                continue;
            }

            let before = current.len();
            current = match processor.process(current) {
                Ok(processed) => processed,
                Err(e) => {
                    warn!("Processor '{}' failed: {}", processor.name(), e);
                    return Err(e);
                }
            };
            debug!(
                "Processor '{}': {} -> {} polylines",
                processor.name(),
                before,
                current.len()
            );
        }

        Ok(current)
    }
}
