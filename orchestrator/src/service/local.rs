use async_trait::async_trait;

use model::{reference, Topology};

use crate::error::StepError;

use super::{TrainRequest, TrainResponse, TrainService};

/// Offline stand-in for the remote optimizer: one plain gradient-descent
/// sweep per step via `model::reference`.
///
/// The physics-loss term is not computed locally; `lambda_pde` and
/// `decay` ride along unused. Infallible.
pub struct LocalTrainService;

#[async_trait]
impl TrainService for LocalTrainService {
    async fn train(&self, request: TrainRequest) -> Result<TrainResponse, StepError> {
        let mut widths = vec![request.inputs.first().map_or(1, Vec::len)];
        widths.extend_from_slice(&request.hidden_layers);
        widths.push(1);
        let topology = Topology::from_widths(widths);

        let previous = request.previous_params.unwrap_or_default();
        let out = reference::gradient_step(
            &topology,
            &previous,
            &request.inputs,
            &request.targets,
            request.learning_rate,
        );

        Ok(TrainResponse {
            params: out.params,
            losses: vec![out.loss],
            prediction: vec![vec![out.prediction]],
            target: vec![vec![out.target]],
        })
    }
}
