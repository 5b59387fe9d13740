//! Request entry point: wires the plugin snapshot, the scheduler and the
//! metrics probe around one chain invocation per request.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use crate::ChainError;
use crate::GatewayPlugin;
use crate::MetricsProbe;
use crate::PluginChain;
use crate::RequestContext;
use crate::Result;
use crate::Scheduler;
use crate::Settings;


type PluginSnapshot = Arc<Vec<Arc<dyn GatewayPlugin>>>;

/// Runs every inbound request through the active plugin-sequence snapshot.
///
/// The snapshot is replaced atomically as a whole; in-flight requests keep
/// the sequence they started with, and no in-place mutation is ever
/// visible to them.
pub struct GatewayHandler {
    plugins: ArcSwap<Vec<Arc<dyn GatewayPlugin>>>,
    scheduler: Scheduler,
    probe: MetricsProbe,
}

impl GatewayHandler {
    pub fn new(
        plugins: Vec<Arc<dyn GatewayPlugin>>,
        scheduler: Scheduler,
        probe: MetricsProbe,
    ) -> Self {
        Self {
            plugins: ArcSwap::from_pointee(plugins),
            scheduler,
            probe,
        }
    }

    pub fn from_settings(
        settings: &Settings,
        plugins: Vec<Arc<dyn GatewayPlugin>>,
    ) -> Self {
        Self::new(
            plugins,
            Scheduler::new(&settings.gateway),
            MetricsProbe::new(&settings.monitoring),
        )
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.load().len()
    }

    /// Atomic whole-snapshot swap of the plugin sequence.
    pub fn replace_plugins(
        &self,
        plugins: Vec<Arc<dyn GatewayPlugin>>,
    ) {
        debug!(plugins = plugins.len(), "plugin snapshot replaced");
        self.plugins.store(Arc::new(plugins));
    }

    /// Handle one request: count it, time it, and run the chain on the
    /// worker pool. The accepting task is freed as soon as the chain is
    /// scheduled.
    ///
    /// Every request resolves to a completed context or an explicit error,
    /// never an indefinitely pending future. The latency timer, when
    /// started, is stopped exactly once: observed on success, discarded on
    /// failure.
    pub async fn handle(
        &self,
        mut ctx: RequestContext,
    ) -> Result<RequestContext> {
        self.probe.request_inc();
        let timer = self.probe.start_request_timer();

        let snapshot: PluginSnapshot = self.plugins.load_full();
        let outcome = self
            .scheduler
            .spawn(async move {
                let result = PluginChain::new(snapshot).execute(&mut ctx).await;
                result.map(|_| ctx)
            })
            .await;

        match outcome {
            Ok(Ok(ctx)) => {
                if let Some(timer) = timer {
                    timer.observe_duration();
                }
                Ok(ctx)
            }
            Ok(Err(e)) => {
                if let Some(timer) = timer {
                    timer.stop_and_discard();
                }
                Err(e)
            }
            Err(join_error) => {
                if let Some(timer) = timer {
                    timer.stop_and_discard();
                }
                Err(ChainError::TaskFailed(join_error).into())
            }
        }
    }
}
