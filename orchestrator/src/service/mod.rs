//! The seam between the run controller and gradient computation.
//!
//! The controller only ever talks to a [`TrainService`]; the primary
//! implementation posts to the remote optimizer over HTTP, the secondary
//! one runs the local reference trainer so the tool works offline.

mod http;
mod local;

pub use http::{HttpTrainService, DEFAULT_BASE_URL};
pub use local::LocalTrainService;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use model::ParamSnapshot;

use crate::{
    config::{self, RunConfig},
    error::StepError,
};

/// Request body of one training step. `previous_params` is omitted while
/// no trained snapshot exists yet (first epoch after build or reset), so
/// the service initializes fresh parameters.
#[derive(Debug, Clone, Serialize)]
pub struct TrainRequest {
    pub inputs: Vec<Vec<f32>>,
    pub targets: Vec<Vec<f32>>,
    pub hidden_layers: Vec<usize>,
    pub epochs: usize,
    pub learning_rate: f32,
    pub decay: f32,
    pub lambda_pde: f32,
    pub inputs_collocation: Vec<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_params: Option<ParamSnapshot>,
}

impl TrainRequest {
    /// Builds the per-epoch request: one service-side epoch per call, the
    /// bundled dataset, and the caller's accumulated parameters.
    pub fn for_epoch(cfg: &RunConfig, previous: Option<ParamSnapshot>) -> Self {
        Self {
            inputs: config::inputs(),
            targets: config::targets(),
            hidden_layers: vec![cfg.neurons_per_layer; cfg.hidden_layers],
            epochs: 1,
            learning_rate: cfg.learning_rate,
            decay: cfg.decay,
            lambda_pde: cfg.lambda_pde,
            inputs_collocation: config::collocation(),
            previous_params: previous,
        }
    }
}

/// Response body of one training step. Every field except `params` is
/// optional on the wire and defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainResponse {
    pub params: ParamSnapshot,
    #[serde(default)]
    pub losses: Vec<f32>,
    #[serde(default)]
    pub prediction: Vec<Vec<f32>>,
    #[serde(default)]
    pub target: Vec<Vec<f32>>,
}

impl TrainResponse {
    // Single-sample convention: only the first entry of each series is
    // charted, defaulting to zero when absent.

    pub fn loss0(&self) -> f32 {
        self.losses.first().copied().unwrap_or(0.0)
    }

    pub fn prediction0(&self) -> f32 {
        self.prediction
            .first()
            .and_then(|row| row.first())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn target0(&self) -> f32 {
        self.target
            .first()
            .and_then(|row| row.first())
            .copied()
            .unwrap_or(0.0)
    }
}

/// One training step: consumes the previous snapshot, produces the next.
/// Implementations are plain one-shot calls; no retry or idempotency key.
#[async_trait]
pub trait TrainService: Send + Sync {
    async fn train(&self, request: TrainRequest) -> Result<TrainResponse, StepError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_omits_previous_params() {
        let req = TrainRequest::for_epoch(&RunConfig::default(), None);
        let body = serde_json::to_value(&req).unwrap();

        assert!(body.get("previous_params").is_none());
        assert_eq!(body["epochs"], 1);
        assert_eq!(body["hidden_layers"], serde_json::json!([4]));
        assert_eq!(body["inputs"], serde_json::json!([[0.0], [1.0], [0.5]]));
        assert_eq!(
            body["inputs_collocation"],
            serde_json::json!([[0.1], [0.3], [0.7], [0.9]])
        );
    }

    #[test]
    fn later_requests_carry_previous_params() {
        let cfg = RunConfig {
            hidden_layers: 1,
            neurons_per_layer: 1,
            ..RunConfig::default()
        };
        let previous = ParamSnapshot::zeroed(&cfg.topology());
        let req = TrainRequest::for_epoch(&cfg, Some(previous));
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(
            body["previous_params"]["weights"],
            serde_json::json!([[[0.0]], [[0.0]]])
        );
        assert_eq!(
            body["previous_params"]["biases"],
            serde_json::json!([[[0.0]], [[0.0]]])
        );
    }

    #[test]
    fn response_accessors_default_to_zero() {
        let resp: TrainResponse = serde_json::from_str(r#"{"params":{}}"#).unwrap();
        assert_eq!(resp.loss0(), 0.0);
        assert_eq!(resp.prediction0(), 0.0);
        assert_eq!(resp.target0(), 0.0);

        let resp: TrainResponse = serde_json::from_str(
            r#"{"params":{},"losses":[0.7],"prediction":[[0.4]],"target":[[0.5]]}"#,
        )
        .unwrap();
        assert_eq!(resp.loss0(), 0.7);
        assert_eq!(resp.prediction0(), 0.4);
        assert_eq!(resp.target0(), 0.5);
    }
}
