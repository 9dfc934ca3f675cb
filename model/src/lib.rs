//! Pure math for the PINN visualizer: network topology, parameter
//! snapshots in the remote protocol's wire shape, diagram geometry, the
//! activation evaluator with calculation traces, and a local reference
//! gradient-descent trainer.
//!
//! Nothing here is async and nothing performs I/O; the `orchestrator`
//! crate drives these functions from its run loop.

pub mod evaluator;
pub mod geometry;
pub mod params;
pub mod reference;
pub mod topology;

pub use evaluator::{evaluate, sigmoid, Evaluation, Focus, NO_CALCULATIONS};
pub use geometry::{compute_layout, Point};
pub use params::ParamSnapshot;
pub use topology::Topology;
