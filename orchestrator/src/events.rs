use crate::animator::Highlight;

/// Messages from the run loop to presentation consumers, carried on an
/// unbounded channel and drained once per UI frame.
///
/// `Trace` and `Highlights` replace the previous value wholesale;
/// `EpochCompleted` appends to the consumer's own series.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// One remote step finished and its results were appended to the
    /// result buffers.
    EpochCompleted {
        epoch: usize,
        loss: f32,
        prediction: f32,
        target: f32,
    },
    /// Fresh activations for the diagram, input layer included.
    Activations(Vec<Vec<f32>>),
    /// A new calculation trace for the console.
    Trace(Vec<String>),
    /// The animation's highlight set; empty clears all marks.
    Highlights(Vec<Highlight>),
    /// A training step failed and the remaining loop was abandoned.
    StepFailed { epoch: usize, reason: String },
    /// The run completed every configured epoch. Emitted exactly once
    /// per completed run, never after a stop or a failed step.
    Finished,
}
