use serde::Deserialize;

/// Options controlling the parallel engine.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct EngineOptions {
    /// Number of spawned band workers. The invoking thread always runs the
    /// final band itself, so a pass uses `workers + 1` threads in total;
    /// `workers == 0` degenerates to the serial path.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

impl EngineOptions {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// One band per available core, minus the invoking thread's own band.
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1))
        .unwrap_or(0)
}
