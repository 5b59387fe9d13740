//! Worker-pool policy for shifting chain execution off the accepting task.

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::GatewayConfig;

#[cfg(test)]
mod scheduler_test;

/// Pool policy, chosen once at startup.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerKind {
    /// Bounds concurrently active chain executions; excess queues FIFO.
    Fixed,
    /// Admits every request immediately; the runtime grows on demand.
    Elastic,
}

impl Default for SchedulerKind {
    fn default() -> Self {
        SchedulerKind::Fixed
    }
}

/// Hands chain invocations to the runtime so the task that accepted the
/// request is freed immediately; suspended plugins resume on any worker.
///
/// The fixed policy is the sole admission-control point of the data plane:
/// a semaphore sized to the configured worker count bounds active chains
/// and queues the rest in arrival order. The chain engine itself applies
/// no additional admission control.
#[derive(Clone)]
pub struct Scheduler {
    permits: Option<Arc<Semaphore>>,
}

impl Scheduler {
    pub fn new(config: &GatewayConfig) -> Self {
        let permits = match config.scheduler {
            SchedulerKind::Fixed => {
                Some(Arc::new(Semaphore::new(config.worker_threads)))
            }
            SchedulerKind::Elastic => None,
        };
        Self { permits }
    }

    pub fn elastic() -> Self {
        Self { permits: None }
    }

    pub fn spawn<F>(
        &self,
        future: F,
    ) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        match &self.permits {
            Some(permits) => {
                let permits = Arc::clone(permits);
                tokio::spawn(async move {
                    // The semaphore lives as long as the scheduler and is
                    // never closed.
                    let _permit = permits.acquire_owned().await.ok();
                    future.await
                })
            }
            None => tokio::spawn(future),
        }
    }
}
