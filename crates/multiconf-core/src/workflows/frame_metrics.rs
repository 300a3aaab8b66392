use super::EnsembleInput;
use crate::core::models::records::MetricRecord;
use crate::engine::error::EngineError;
use crate::engine::harness::{Frame, HarnessConfig, MetricError, MetricHarness};
use crate::engine::progress::ProgressReporter;
use std::path::Path;
use tracing::{info, instrument, warn};

/// An expensive, externally-implemented per-frame metric (density-fit
/// scoring, free-R refinement). Implementations get a private scratch
/// directory and return the calculator's payload as an opaque string.
pub trait FrameMetric: Sync {
    fn compute(&self, frame: &Frame, scratch: &Path) -> Result<String, MetricError>;
}

/// Applies `metric` to every frame of every predictor's ensemble. The
/// outer predictor loop is sequential, the inner frame loop runs on the
/// harness pool, so worker count never multiplies across the two levels.
#[instrument(skip_all, name = "frame_metrics_workflow")]
pub fn run(
    ensembles: &[EnsembleInput],
    metric: &dyn FrameMetric,
    config: &HarnessConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<MetricRecord>, EngineError> {
    let harness = MetricHarness::new(config)?;

    let mut records = Vec::new();
    for input in ensembles {
        let Some(structure) = &input.structure else {
            warn!(predictor = %input.predictor, "Ensemble not found, skipping");
            continue;
        };
        if structure.models().is_empty() {
            warn!(predictor = %input.predictor, "Ensemble has no frames, skipping");
            continue;
        }

        info!(
            predictor = %input.predictor,
            frames = structure.models().len(),
            "Computing frame metrics"
        );
        let results = harness.run(
            &input.predictor,
            structure.models(),
            reporter,
            |frame, scratch| metric.compute(frame, scratch),
        );
        records.extend(results.into_iter().map(|r| MetricRecord {
            predictor: r.predictor,
            frame: r.frame,
            payload: r.value,
        }));
    }

    info!(rows = records.len(), "Frame metric run complete");
    Ok(records)
}
