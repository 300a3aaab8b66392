use thiserror::Error;

/// Systemic failures that leave the engine unable to make progress.
///
/// This is the only error class that aborts a run. Everything local to one
/// unit of work (one residue, one frame, one predictor) is absorbed at that
/// unit's boundary, logged, and excluded from output instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to create scratch directory: {source}")]
    ScratchDir {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to build worker pool: {source}")]
    PoolBuild {
        #[from]
        source: rayon::ThreadPoolBuildError,
    },
}
