use std::{io, sync::Arc};

use tokio::runtime::Runtime;

use crate::{
    config::RunConfig,
    controller::{ResultBuffers, RunController, RunSubscription},
    service::TrainService,
    state::RunStatus,
};

/// An ongoing visualization run driven in the background.
///
/// Bundles a runtime with the run controller so synchronous callers (the
/// terminal UI loop) can start, steer, and observe training without
/// owning an executor themselves.
pub struct Session {
    runtime: Runtime,
    controller: RunController,
}

impl Session {
    /// Builds the controller for `cfg`, publishes the initial
    /// zero-parameter evaluation, and returns the session together with
    /// the consumer-side subscription.
    pub fn new(
        cfg: RunConfig,
        service: Arc<dyn TrainService>,
    ) -> io::Result<(Self, RunSubscription)> {
        let runtime = Runtime::new()?;
        let (controller, subscription) = RunController::new(cfg, service);
        controller.initialize();

        Ok((Self { runtime, controller }, subscription))
    }

    /// Spawns the epoch loop; a no-op while a loop is already active.
    pub fn start(&self) {
        let controller = self.controller.clone();
        self.runtime.spawn(async move { controller.run().await });
    }

    pub fn pause(&self) {
        self.controller.pause();
    }

    pub fn resume(&self) {
        self.controller.resume();
    }

    pub fn stop(&self) {
        self.controller.stop();
    }

    pub fn step(&self) {
        self.controller.step();
    }

    pub fn reset_network(&self) {
        self.controller.reset_network();
    }

    pub fn set_speed(&self, speed: usize) {
        self.controller.set_speed(speed);
    }

    pub fn speed(&self) -> usize {
        self.controller.speed()
    }

    pub fn status(&self) -> RunStatus {
        self.controller.status()
    }

    pub fn buffers(&self) -> ResultBuffers {
        self.controller.buffers()
    }

    pub fn controller(&self) -> &RunController {
        &self.controller
    }
}
