use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};

use model::{evaluate, Focus, ParamSnapshot, Topology, NO_CALCULATIONS};

use crate::{
    animator,
    config::{self, delay_for_speed, RunConfig},
    controls::Controls,
    events::RunEvent,
    service::{TrainRequest, TrainService},
    state::{RunPhase, RunStatus},
};

/// Append-only per-epoch series shared with the chart adapter. One entry
/// per completed remote step; cleared only on reset. Readers may observe
/// N or N+1 entries mid-append, which is acceptable staleness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBuffers {
    pub losses: Vec<f32>,
    pub predictions: Vec<f32>,
    pub targets: Vec<f32>,
}

impl ResultBuffers {
    fn append(&mut self, loss: f32, prediction: f32, target: f32) {
        self.losses.push(loss);
        self.predictions.push(prediction);
        self.targets.push(target);
    }

    fn clear(&mut self) {
        self.losses.clear();
        self.predictions.clear();
        self.targets.clear();
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }
}

/// Receiver half handed to presentation consumers: the lifecycle watch
/// plus the run-event stream.
pub struct RunSubscription {
    pub status: watch::Receiver<RunStatus>,
    pub events: mpsc::UnboundedReceiver<RunEvent>,
}

/// Owns the training-run lifecycle: the epoch loop issuing one remote
/// step per epoch, the parameter snapshot it carries forward, the result
/// buffers, and the forward-pass animation.
///
/// Cloning yields another handle onto the same run. Control methods are
/// synchronous flag flips plus a state transition, safe to call from a
/// UI thread; only [`RunController::run`] needs an executor.
#[derive(Clone)]
pub struct RunController {
    cfg: RunConfig,
    topology: Topology,
    service: Arc<dyn TrainService>,
    controls: Controls,
    status: Arc<watch::Sender<RunStatus>>,
    params: Arc<Mutex<ParamSnapshot>>,
    /// Set once a trained snapshot is installed; gates `previous_params`.
    trained: Arc<AtomicBool>,
    buffers: Arc<Mutex<ResultBuffers>>,
    events: mpsc::UnboundedSender<RunEvent>,
    speed: Arc<AtomicUsize>,
    in_flight: Arc<AtomicBool>,
}

impl RunController {
    pub fn new(cfg: RunConfig, service: Arc<dyn TrainService>) -> (Self, RunSubscription) {
        let topology = cfg.topology();
        let (status_tx, status_rx) = watch::channel(RunStatus {
            epochs_total: cfg.epochs,
            ..RunStatus::default()
        });
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let controller = Self {
            topology: topology.clone(),
            service,
            controls: Controls::new(),
            status: Arc::new(status_tx),
            params: Arc::new(Mutex::new(ParamSnapshot::zeroed(&topology))),
            trained: Arc::new(AtomicBool::new(false)),
            buffers: Arc::new(Mutex::new(ResultBuffers::default())),
            events: events_tx,
            speed: Arc::new(AtomicUsize::new(cfg.speed)),
            in_flight: Arc::new(AtomicBool::new(false)),
            cfg,
        };

        let subscription = RunSubscription {
            status: status_rx,
            events: events_rx,
        };
        (controller, subscription)
    }

    pub fn config(&self) -> &RunConfig {
        &self.cfg
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn status(&self) -> RunStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<RunStatus> {
        self.status.subscribe()
    }

    pub fn buffers(&self) -> ResultBuffers {
        self.buffers.lock().clone()
    }

    pub fn params(&self) -> ParamSnapshot {
        self.params.lock().clone()
    }

    /// Publishes the zero-parameter evaluation so the diagram and console
    /// have content before the first epoch.
    pub fn initialize(&self) {
        self.refresh_default_view();
    }

    /// The epoch loop. Valid from `Idle` or `Finished`; re-entrant calls
    /// while a loop is active (and starts from `Stopped`) are no-ops.
    ///
    /// Runs until every configured epoch completed, a step failed, or a
    /// stop was observed at a checkpoint.
    pub async fn run(&self) {
        if !matches!(self.status().phase, RunPhase::Idle | RunPhase::Finished) {
            return;
        }
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return;
        }

        self.controls.arm();
        self.status.send_modify(|s| {
            s.phase = RunPhase::Running;
            s.current_epoch = 0;
            s.has_started = true;
        });

        let total = self.cfg.epochs;
        let mut halted = false;

        for epoch in 0..total {
            if self.controls.stop_requested() {
                halted = true;
                break;
            }
            self.controls.wait_if_paused().await;
            if self.controls.stop_requested() {
                halted = true;
                break;
            }

            // Borrow the snapshot read-only for the request body; the
            // response installs a fresh one wholesale.
            let previous = self
                .trained
                .load(Ordering::Acquire)
                .then(|| self.params.lock().clone());
            let request = TrainRequest::for_epoch(&self.cfg, previous);

            match self.service.train(request).await {
                Ok(response) => {
                    *self.params.lock() = response.params.clone();
                    self.trained.store(true, Ordering::Release);

                    let (loss, prediction, target) =
                        (response.loss0(), response.prediction0(), response.target0());
                    self.buffers.lock().append(loss, prediction, target);
                    self.status.send_modify(|s| s.current_epoch = epoch + 1);
                    log::info!("epoch {}: loss={loss:.4}", epoch + 1);
                    let _ = self.events.send(RunEvent::EpochCompleted {
                        epoch,
                        loss,
                        prediction,
                        target,
                    });

                    self.refresh_default_view();
                    self.animate_forward_pass().await;
                }
                Err(err) => {
                    // Silent halt: fewer epochs than requested completed,
                    // no distinct failed state is surfaced.
                    log::error!("training step {} failed: {err}", epoch + 1);
                    let _ = self.events.send(RunEvent::StepFailed {
                        epoch,
                        reason: err.to_string(),
                    });
                    halted = true;
                    break;
                }
            }

            if epoch + 1 < total {
                tokio::time::sleep(self.delay()).await;
            }
        }

        if halted || self.controls.stop_requested() {
            // a reset may have already returned the machine to Idle
            self.status.send_if_modified(|s| {
                if s.phase == RunPhase::Idle {
                    return false;
                }
                s.phase = RunPhase::Stopped;
                true
            });
        } else {
            self.status.send_modify(|s| s.phase = RunPhase::Finished);
            let _ = self.events.send(RunEvent::Finished);
        }
        self.in_flight.store(false, Ordering::Release);
    }

    /// Walks every non-input neuron in strict layer-then-index order,
    /// publishing its calculation trace and highlight set, paced by the
    /// speed slider. Aborts at the first checkpoint after a stop.
    pub async fn animate_forward_pass(&self) {
        let widths = self.topology.widths().to_vec();
        let input = config::input_sample();

        for layer in 1..widths.len() {
            for index in 0..widths[layer] {
                if self.controls.stop_requested() {
                    return;
                }
                self.controls.wait_if_paused().await;
                if self.controls.stop_requested() {
                    return;
                }

                let params = self.params.lock().clone();
                let eval = evaluate(
                    &self.topology,
                    &input,
                    &params,
                    Some(Focus { layer, neuron: index }),
                );
                let _ = self.events.send(RunEvent::Trace(eval.trace));
                let _ = self
                    .events
                    .send(RunEvent::Highlights(animator::highlight_set(&widths, layer, index)));

                tokio::time::sleep(self.delay()).await;
            }
        }

        let _ = self.events.send(RunEvent::Highlights(Vec::new()));
        let _ = self
            .events
            .send(RunEvent::Trace(vec![NO_CALCULATIONS.to_string()]));
    }

    /// Valid from `Running`; the flag takes effect at the next checkpoint.
    pub fn pause(&self) {
        if self.status().phase != RunPhase::Running {
            return;
        }
        self.controls.pause();
        self.status.send_modify(|s| s.phase = RunPhase::Paused);
    }

    /// Valid from `Paused`; the loop resumes exactly where it suspended.
    pub fn resume(&self) {
        if self.status().phase != RunPhase::Paused {
            return;
        }
        self.controls.resume();
        self.status.send_modify(|s| s.phase = RunPhase::Running);
    }

    /// Valid from any non-terminal state, including `Paused` (no
    /// intervening resume needed). Cooperative: bounded by the current
    /// checkpoint's wait, up to the slowest pacing delay.
    pub fn stop(&self) {
        if self.status().phase.is_terminal() {
            return;
        }
        self.controls.stop();
        self.status.send_modify(|s| s.phase = RunPhase::Stopped);
    }

    /// While paused, advances the animation by exactly one neuron.
    pub fn step(&self) {
        self.controls.request_step();
    }

    pub fn set_speed(&self, speed: usize) {
        self.speed.store(speed, Ordering::Release);
    }

    pub fn speed(&self) -> usize {
        self.speed.load(Ordering::Acquire)
    }

    /// Stops any active loop, zeroes the parameter snapshot to topology
    /// size, clears the trained-parameter cache and the result buffers,
    /// clears highlights and trace, and returns the machine to `Idle`.
    pub fn reset_network(&self) {
        self.controls.stop();

        *self.params.lock() = ParamSnapshot::zeroed(&self.topology);
        self.trained.store(false, Ordering::Release);
        self.buffers.lock().clear();

        let _ = self.events.send(RunEvent::Highlights(Vec::new()));
        let params = self.params.lock().clone();
        let eval = evaluate(&self.topology, &config::input_sample(), &params, None);
        let _ = self.events.send(RunEvent::Activations(eval.activations));
        let _ = self.events.send(RunEvent::Trace(vec![NO_CALCULATIONS.to_string()]));

        self.status.send_modify(|s| {
            s.phase = RunPhase::Idle;
            s.current_epoch = 0;
            s.has_started = false;
        });
    }

    fn refresh_default_view(&self) {
        let params = self.params.lock().clone();
        let eval = evaluate(&self.topology, &config::input_sample(), &params, None);
        let _ = self.events.send(RunEvent::Activations(eval.activations));
        let _ = self.events.send(RunEvent::Trace(eval.trace));
    }

    fn delay(&self) -> Duration {
        delay_for_speed(self.speed())
    }
}
