use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::structure::Model;
use rayon::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tempfile::TempDir;
use thiserror::Error;
use tracing::warn;

/// Failure of one frame's metric computation. Caught at the task boundary,
/// logged, and excluded; never aborts the pool.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct MetricError(pub String);

impl From<std::io::Error> for MetricError {
    fn from(source: std::io::Error) -> Self {
        MetricError(source.to_string())
    }
}

/// One predicted conformer handed to a metric function.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub predictor: &'a str,
    pub index: usize,
    pub model: &'a Model,
}

/// A successfully computed metric, tagged so results collected in completion
/// order can be re-sorted deterministically afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult<R> {
    pub predictor: String,
    pub frame: usize,
    pub value: R,
}

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub workers: usize,
    pub progress_every: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            progress_every: 5,
        }
    }
}

// Created by the dispatcher and passed into each task; the directory is
// created lazily under the harness-wide root, so tasks never contend on
// file paths.
struct TaskScratch<'a> {
    root: &'a Path,
    dir: Option<TempDir>,
}

impl TaskScratch<'_> {
    fn path(&mut self) -> Result<&Path, MetricError> {
        let dir = match self.dir.take() {
            Some(dir) => dir,
            None => tempfile::tempdir_in(self.root)?,
        };
        Ok(self.dir.insert(dir).path())
    }
}

/// Bounded-concurrency executor for expensive, failure-prone external
/// per-frame metric computations. The scratch root is removed when the
/// harness drops, on all exit paths.
///
/// Known limitation: there is no per-frame timeout or cancellation, so a
/// hung external call holds its worker slot for the remainder of the run.
pub struct MetricHarness {
    pool: rayon::ThreadPool,
    scratch_root: TempDir,
    progress_every: u64,
}

impl MetricHarness {
    /// Builds the worker pool and the scratch root, the only failures that
    /// abort a run.
    pub fn new(config: &HarnessConfig) -> Result<Self, EngineError> {
        let scratch_root = tempfile::tempdir()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()?;
        Ok(Self {
            pool,
            scratch_root,
            progress_every: config.progress_every.max(1),
        })
    }

    pub fn scratch_root(&self) -> &Path {
        self.scratch_root.path()
    }

    /// Applies `metric` to every frame of one predictor's ensemble,
    /// returning successful results only.
    pub fn run<R, F>(
        &self,
        predictor: &str,
        models: &[Model],
        reporter: &ProgressReporter,
        metric: F,
    ) -> Vec<FrameResult<R>>
    where
        R: Send,
        F: Fn(&Frame, &Path) -> Result<R, MetricError> + Sync,
    {
        let total = models.len() as u64;
        reporter.report(Progress::PredictorStart {
            predictor: predictor.to_string(),
            frames: total,
        });

        let completed = AtomicU64::new(0);
        let root = self.scratch_root.path();
        let progress_every = self.progress_every;

        let results: Vec<Option<FrameResult<R>>> = self.pool.install(|| {
            models
                .par_iter()
                .enumerate()
                .map_init(
                    || TaskScratch { root, dir: None },
                    |scratch, (index, model)| {
                        let frame = Frame {
                            predictor,
                            index,
                            model,
                        };
                        let outcome = scratch.path().and_then(|dir| metric(&frame, dir));

                        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        if done % progress_every == 0 || done == total {
                            reporter.report(Progress::FramesCompleted {
                                completed: done,
                                total,
                            });
                        }

                        match outcome {
                            Ok(value) => Some(FrameResult {
                                predictor: predictor.to_string(),
                                frame: index,
                                value,
                            }),
                            Err(error) => {
                                warn!(
                                    predictor,
                                    frame = index,
                                    %error,
                                    "Frame metric failed, excluding from results"
                                );
                                None
                            }
                        }
                    },
                )
                .collect()
        });

        reporter.report(Progress::PredictorFinish {
            predictor: predictor.to_string(),
        });
        results.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn frames(n: usize) -> Vec<Model> {
        vec![Model::new(); n]
    }

    #[test]
    fn failing_frames_are_excluded_without_aborting_the_batch() {
        let harness = MetricHarness::new(&HarnessConfig {
            workers: 3,
            progress_every: 3,
        })
        .unwrap();
        let reporter = ProgressReporter::default();

        let results = harness.run("bioemu", &frames(10), &reporter, |frame, _scratch| {
            if frame.index == 4 {
                Err(MetricError("ValueError".to_string()))
            } else {
                Ok(frame.index * 10)
            }
        });

        assert_eq!(results.len(), 9);
        let indices: HashSet<usize> = results.iter().map(|r| r.frame).collect();
        assert_eq!(indices.len(), 9, "no duplicate frame indices");
        assert!(!indices.contains(&4));
        for result in &results {
            assert_eq!(result.predictor, "bioemu");
            assert_eq!(result.value, result.frame * 10);
        }
    }

    #[test]
    fn all_failing_frames_yield_an_empty_result_set() {
        let harness = MetricHarness::new(&HarnessConfig::default()).unwrap();
        let reporter = ProgressReporter::default();

        let results: Vec<FrameResult<()>> =
            harness.run("sam2", &frames(6), &reporter, |_, _| {
                Err(MetricError("refinement diverged".to_string()))
            });
        assert!(results.is_empty());
    }

    #[test]
    fn tasks_receive_private_scratch_dirs_under_the_root() {
        let harness = MetricHarness::new(&HarnessConfig {
            workers: 2,
            progress_every: 4,
        })
        .unwrap();
        let root = harness.scratch_root().to_path_buf();
        let reporter = ProgressReporter::default();

        let results = harness.run("boltz2", &frames(8), &reporter, |_, scratch| {
            assert!(scratch.is_dir());
            assert!(scratch.starts_with(&root));
            Ok(scratch.to_path_buf())
        });
        assert_eq!(results.len(), 8);
    }

    #[test]
    fn scratch_root_is_removed_when_the_harness_drops() {
        let harness = MetricHarness::new(&HarnessConfig::default()).unwrap();
        let root = harness.scratch_root().to_path_buf();
        let reporter = ProgressReporter::default();

        let _ = harness.run("openfold", &frames(3), &reporter, |_, _| Ok(()));
        assert!(root.is_dir());
        drop(harness);
        assert!(!root.exists());
    }

    #[test]
    fn progress_is_reported_periodically_and_at_final_completion() {
        let harness = MetricHarness::new(&HarnessConfig {
            workers: 3,
            progress_every: 3,
        })
        .unwrap();
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::FramesCompleted { completed, total } = event {
                seen.lock().unwrap().push((completed, total));
            }
        }));

        let _ = harness.run("alphaflow", &frames(10), &reporter, |_, _| Ok(()));

        let mut events = seen.lock().unwrap().clone();
        events.sort_unstable();
        assert_eq!(events, vec![(3, 10), (6, 10), (9, 10), (10, 10)]);
    }
}
