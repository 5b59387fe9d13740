use serde::Deserialize;
use serde::Serialize;

use crate::constants::MIN_FIXED_WORKERS;
use crate::Error;
use crate::Result;
use crate::SchedulerKind;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Worker-pool policy for chain execution
    #[serde(default)]
    pub scheduler: SchedulerKind,

    /// Pool size for the fixed scheduler; ignored by the elastic one
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            scheduler: SchedulerKind::default(),
            worker_threads: default_worker_threads(),
        }
    }
}

impl GatewayConfig {
    /// Validates gateway configuration
    /// # Errors
    /// Returns `Error::InvalidConfig` when the fixed scheduler is selected
    /// with a zero-sized pool.
    pub fn validate(&self) -> Result<()> {
        if self.scheduler == SchedulerKind::Fixed && self.worker_threads == 0 {
            return Err(Error::InvalidConfig(
                "worker_threads cannot be 0 for the fixed scheduler".into(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn default_worker_threads() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    std::cmp::max(2 * cpus + 1, MIN_FIXED_WORKERS)
}
