/// High-level lifecycle states for a training run.
///
/// `Stopped` and `Finished` are terminal except for an explicit reset,
/// which returns the machine to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Stopped,
    Finished,
}

impl RunPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Stopped | RunPhase::Finished)
    }
}

/// The single authoritative run state, published through a watch channel
/// so consumers observe every transition synchronously instead of
/// polling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunStatus {
    pub phase: RunPhase,
    /// Completed epochs so far in the current run.
    pub current_epoch: usize,
    pub epochs_total: usize,
    /// Sticky across pause/stop; cleared only by reset.
    pub has_started: bool,
}
