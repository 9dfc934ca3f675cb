use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use model::{ParamSnapshot, Topology};
use orchestrator::{
    service::{TrainRequest, TrainResponse, TrainService},
    HighlightKind, RunConfig, RunController, RunEvent, RunPhase, RunSubscription, StepError,
};

/// Deterministic in-memory service: answers instantly, optionally fails
/// at one call index, and records whether each request carried
/// accumulated parameters.
struct ScriptedService {
    fail_on: Option<usize>,
    seen_previous: Mutex<Vec<bool>>,
}

impl ScriptedService {
    fn ok() -> Self {
        Self {
            fail_on: None,
            seen_previous: Mutex::new(Vec::new()),
        }
    }

    fn failing_on(call: usize) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::ok()
        }
    }

    fn seen_previous(&self) -> Vec<bool> {
        self.seen_previous.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrainService for ScriptedService {
    async fn train(&self, request: TrainRequest) -> Result<TrainResponse, StepError> {
        let call = {
            let mut seen = self.seen_previous.lock().unwrap();
            seen.push(request.previous_params.is_some());
            seen.len() - 1
        };

        if self.fail_on == Some(call) {
            return Err(StepError::Http { status: 500 });
        }

        let mut widths = vec![request.inputs[0].len()];
        widths.extend_from_slice(&request.hidden_layers);
        widths.push(1);
        let topology = Topology::from_widths(widths);

        let mut params = ParamSnapshot::zeroed(&topology);
        params.weights[0][0][0] = call as f32 + 1.0;

        Ok(TrainResponse {
            params,
            losses: vec![1.0 / (call as f32 + 1.0)],
            prediction: vec![vec![0.25 * (call as f32 + 1.0)]],
            target: vec![vec![0.5]],
        })
    }
}

fn tiny_config(epochs: usize) -> RunConfig {
    RunConfig {
        hidden_layers: 1,
        neurons_per_layer: 1,
        epochs,
        speed: 0,
        ..RunConfig::default()
    }
}

fn drain(subscription: &mut RunSubscription) -> Vec<RunEvent> {
    let mut events = Vec::new();
    while let Ok(event) = subscription.events.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn three_epochs_fill_buffers_and_finish_once() {
    let service = Arc::new(ScriptedService::ok());
    let (controller, mut subscription) = RunController::new(tiny_config(3), service);

    controller.run().await;

    let buffers = controller.buffers();
    assert_eq!(buffers.losses.len(), 3);
    assert_eq!(buffers.predictions.len(), 3);
    assert_eq!(buffers.targets.len(), 3);
    assert_eq!(buffers.targets, vec![0.5, 0.5, 0.5]);

    let events = drain(&mut subscription);
    let finished = events
        .iter()
        .filter(|e| matches!(e, RunEvent::Finished))
        .count();
    assert_eq!(finished, 1);

    // finished arrives after the third epoch completion
    let last_epoch = events
        .iter()
        .rposition(|e| matches!(e, RunEvent::EpochCompleted { epoch: 2, .. }))
        .expect("third epoch event");
    let finish_pos = events
        .iter()
        .position(|e| matches!(e, RunEvent::Finished))
        .unwrap();
    assert!(finish_pos > last_epoch);

    let status = controller.status();
    assert_eq!(status.phase, RunPhase::Finished);
    assert_eq!(status.current_epoch, 3);
    assert!(status.has_started);
}

#[tokio::test]
async fn failing_second_epoch_halts_without_finishing() {
    let service = Arc::new(ScriptedService::failing_on(1));
    let (controller, mut subscription) = RunController::new(tiny_config(5), service.clone());

    controller.run().await;

    assert_eq!(controller.buffers().len(), 1);
    assert_eq!(service.seen_previous().len(), 2);

    let events = drain(&mut subscription);
    assert!(events.iter().all(|e| !matches!(e, RunEvent::Finished)));
    assert!(events
        .iter()
        .any(|e| matches!(e, RunEvent::StepFailed { epoch: 1, .. })));
    assert_eq!(controller.status().phase, RunPhase::Stopped);
}

#[tokio::test]
async fn stop_while_paused_goes_straight_to_stopped() {
    let service = Arc::new(ScriptedService::ok());
    let (controller, _subscription) = RunController::new(tiny_config(50), service);

    let task = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.run().await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    controller.pause();
    assert_eq!(controller.status().phase, RunPhase::Paused);

    controller.stop();
    assert_eq!(controller.status().phase, RunPhase::Stopped);

    timeout(Duration::from_secs(2), task)
        .await
        .expect("loop must exit after stop")
        .unwrap();
    assert_eq!(controller.status().phase, RunPhase::Stopped);
}

#[tokio::test]
async fn reentrant_run_is_a_noop() {
    let service = Arc::new(ScriptedService::ok());
    let (controller, mut subscription) = RunController::new(tiny_config(3), service);

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.run().await })
    };
    let second = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.run().await })
    };
    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(controller.buffers().len(), 3);
    let finished = drain(&mut subscription)
        .iter()
        .filter(|e| matches!(e, RunEvent::Finished))
        .count();
    assert_eq!(finished, 1);
}

#[tokio::test]
async fn accumulated_params_are_carried_after_the_first_step() {
    let service = Arc::new(ScriptedService::ok());
    let (controller, _subscription) = RunController::new(tiny_config(3), service.clone());

    controller.run().await;

    assert_eq!(service.seen_previous(), vec![false, true, true]);
    // the last installed snapshot is the one the service produced
    assert_eq!(controller.params().weights[0][0][0], 3.0);
}

#[tokio::test]
async fn reset_zeroes_snapshot_and_returns_to_idle() {
    let service = Arc::new(ScriptedService::ok());
    let (controller, _subscription) = RunController::new(tiny_config(2), service.clone());

    controller.run().await;
    assert_eq!(controller.status().phase, RunPhase::Finished);

    controller.reset_network();

    let params = controller.params();
    let topology = controller.topology().clone();
    assert_eq!(params, ParamSnapshot::zeroed(&topology));
    assert!(controller.buffers().is_empty());

    let status = controller.status();
    assert_eq!(status.phase, RunPhase::Idle);
    assert_eq!(status.current_epoch, 0);
    assert!(!status.has_started);

    // a fresh run starts over without accumulated parameters
    controller.run().await;
    assert_eq!(service.seen_previous(), vec![false, true, false, true]);
}

#[tokio::test]
async fn animation_walks_neurons_in_feedforward_order() {
    let cfg = RunConfig {
        hidden_layers: 1,
        neurons_per_layer: 2,
        epochs: 1,
        speed: 0,
        ..RunConfig::default()
    };
    let service = Arc::new(ScriptedService::ok());
    let (controller, mut subscription) = RunController::new(cfg, service);

    controller.run().await;

    let highlight_sets: Vec<_> = drain(&mut subscription)
        .into_iter()
        .filter_map(|e| match e {
            RunEvent::Highlights(set) => Some(set),
            _ => None,
        })
        .collect();

    // 2 hidden neurons + 1 output neuron, then the clearing publish
    assert_eq!(highlight_sets.len(), 4);
    assert!(highlight_sets[3].is_empty());

    let expected = [(1usize, 0usize, 1usize), (1, 1, 1), (2, 0, 2)];
    for (set, &(layer, index, prev_width)) in highlight_sets.iter().zip(expected.iter()) {
        let active: Vec<_> = set
            .iter()
            .filter(|h| h.kind == HighlightKind::Active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!((active[0].layer, active[0].index), (layer, index));

        let inputs: Vec<_> = set
            .iter()
            .filter(|h| h.kind == HighlightKind::Input)
            .collect();
        assert_eq!(inputs.len(), prev_width);
        for (k, h) in inputs.iter().enumerate() {
            assert_eq!((h.layer, h.index), (layer - 1, k));
        }
    }
}

#[tokio::test]
async fn stop_from_idle_blocks_start_until_reset() {
    let service = Arc::new(ScriptedService::ok());
    let (controller, _subscription) = RunController::new(tiny_config(2), service);

    controller.stop();
    assert_eq!(controller.status().phase, RunPhase::Stopped);

    controller.run().await;
    assert!(controller.buffers().is_empty());

    controller.reset_network();
    controller.run().await;
    assert_eq!(controller.buffers().len(), 2);
}
