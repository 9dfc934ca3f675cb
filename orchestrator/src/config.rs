use std::time::Duration;

use model::Topology;

/// The bundled exponential-decay teaching dataset: a handful of 1-D
/// samples plus collocation points for the physics residual. Forwarded
/// verbatim with every training request.
pub const INPUTS: [[f32; 1]; 3] = [[0.0], [1.0], [0.5]];
pub const TARGETS: [[f32; 1]; 3] = [[0.0], [1.0], [0.5]];
pub const COLLOCATION: [[f32; 1]; 4] = [[0.1], [0.3], [0.7], [0.9]];

const SPEED_DELAYS_MS: [u64; 4] = [50, 200, 500, 1000];
const DEFAULT_DELAY_MS: u64 = 200;

/// Maps the 0..3 speed slider (0 = fastest) to the pacing delay used both
/// between epochs and between animation steps. Out-of-range values fall
/// back to the default delay.
pub fn delay_for_speed(speed: usize) -> Duration {
    let ms = SPEED_DELAYS_MS.get(speed).copied().unwrap_or(DEFAULT_DELAY_MS);
    Duration::from_millis(ms)
}

pub fn inputs() -> Vec<Vec<f32>> {
    INPUTS.iter().map(|row| row.to_vec()).collect()
}

pub fn targets() -> Vec<Vec<f32>> {
    TARGETS.iter().map(|row| row.to_vec()).collect()
}

pub fn collocation() -> Vec<Vec<f32>> {
    COLLOCATION.iter().map(|row| row.to_vec()).collect()
}

/// The sample evaluated for the diagram and the calculation console.
pub fn input_sample() -> Vec<f32> {
    INPUTS[0].to_vec()
}

/// User configuration for one training run. Validated by the UI (layer
/// bounds, positive epoch count); the controller treats the values as
/// opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub hidden_layers: usize,
    pub neurons_per_layer: usize,
    pub learning_rate: f32,
    pub decay: f32,
    pub epochs: usize,
    pub lambda_pde: f32,
    pub speed: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            hidden_layers: 1,
            neurons_per_layer: 4,
            learning_rate: 0.01,
            decay: 0.1,
            epochs: 10,
            lambda_pde: 1.0,
            speed: 1,
        }
    }
}

impl RunConfig {
    /// The run's layer structure; immutable once a run has started.
    pub fn topology(&self) -> Topology {
        Topology::new(INPUTS[0].len(), self.hidden_layers, self.neurons_per_layer, 1)
    }
}
