use orchestrator::{RunEvent, RunSubscription};
use tokio::sync::{mpsc, watch};

use super::model::{LogLine, RunView};

const MAX_LOGS: usize = 200;

/// Drives the dashboard view from the controller's subscription.
pub struct SessionState {
    view: RunView,
    status: watch::Receiver<orchestrator::RunStatus>,
    events: mpsc::UnboundedReceiver<RunEvent>,
}

impl SessionState {
    pub fn new(subscription: RunSubscription) -> Self {
        let status = subscription.status;
        let view = RunView {
            status: *status.borrow(),
            losses: Vec::new(),
            predictions: Vec::new(),
            targets: Vec::new(),
            activations: Vec::new(),
            highlights: Vec::new(),
            trace: vec![model::NO_CALCULATIONS.to_string()],
            logs: vec![LogLine {
                level: "INFO",
                message: "model built, press s to start training".into(),
            }],
        };

        Self {
            view,
            status,
            events: subscription.events,
        }
    }

    /// Returns the current snapshot for rendering.
    pub fn view(&self) -> &RunView {
        &self.view
    }

    /// Refreshes the lifecycle snapshot and drains all pending run
    /// events. Called once per TUI frame tick; never blocks.
    pub fn tick(&mut self) {
        self.view.status = *self.status.borrow_and_update();

        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: RunEvent) {
        match event {
            RunEvent::EpochCompleted {
                epoch,
                loss,
                prediction,
                target,
            } => {
                self.view.losses.push(loss);
                self.view.predictions.push(prediction);
                self.view.targets.push(target);
                self.push_log(
                    "INFO",
                    format!("epoch {}: loss={loss:.4} prediction={prediction:.4} target={target:.4}",
                        epoch + 1),
                );
            }

            RunEvent::Activations(activations) => self.view.activations = activations,

            RunEvent::Trace(lines) => self.view.trace = lines,

            RunEvent::Highlights(set) => self.view.highlights = set,

            RunEvent::StepFailed { epoch, reason } => {
                self.push_log("ERROR", format!("epoch {}: {reason}", epoch + 1));
                self.push_log("ERROR", "training halted early".into());
            }

            RunEvent::Finished => self.push_log("INFO", "training finished".into()),
        }
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.view.logs.push(LogLine { level, message });
        if self.view.logs.len() > MAX_LOGS {
            let drain = self.view.logs.len() - MAX_LOGS;
            self.view.logs.drain(0..drain);
        }
    }
}
