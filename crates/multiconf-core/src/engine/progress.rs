/// Progress events emitted while a batch run executes.
#[derive(Debug, Clone)]
pub enum Progress {
    PredictorStart { predictor: String, frames: u64 },
    /// Reported every few completions and at the end, never per frame.
    FramesCompleted { completed: u64, total: u64 },
    PredictorFinish { predictor: String },
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional caller-supplied callback.
///
/// The default reporter discards events, so library code can report
/// unconditionally.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
