//! Run orchestration for the PINN visualizer: the lifecycle state
//! machine, the epoch loop issuing one remote training step per epoch,
//! the forward-pass animator, and the training service clients.
//!
//! The [`controller::RunController`] owns all mutable run state; the
//! terminal UI observes it through a watch channel plus a run-event
//! channel and never mutates anything itself.

pub mod animator;
pub mod config;
pub mod controller;
pub mod controls;
pub mod error;
pub mod events;
pub mod service;
pub mod session;
pub mod state;

pub use animator::{Highlight, HighlightKind};
pub use config::RunConfig;
pub use controller::{ResultBuffers, RunController, RunSubscription};
pub use error::StepError;
pub use events::RunEvent;
pub use service::{HttpTrainService, LocalTrainService, TrainService};
pub use session::Session;
pub use state::{RunPhase, RunStatus};
