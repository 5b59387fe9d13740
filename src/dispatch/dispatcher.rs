use std::sync::Arc;

use tracing::debug;
use tracing::error;
use tracing::warn;

use super::listener::ConfigListener;
use crate::ChangeEvent;
use crate::ChangePayload;
use crate::DispatchError;
use crate::Result;

/// Collects listeners during startup wiring. Registration closes when
/// [`DispatcherBuilder::build`] freezes the set; there is no add/remove at
/// runtime.
#[derive(Default)]
pub struct DispatcherBuilder {
    listeners: Vec<Arc<dyn ConfigListener>>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        mut self,
        listener: Arc<dyn ConfigListener>,
    ) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn build(self) -> ChangeDispatcher {
        ChangeDispatcher {
            listeners: self.listeners.into(),
        }
    }
}

/// Forwards each change event to every registered listener's matching
/// handler, in registration order. The dispatcher itself performs no I/O;
/// side effects are entirely the listeners'.
pub struct ChangeDispatcher {
    // Frozen at build time. Read-only thereafter.
    listeners: Arc<[Arc<dyn ConfigListener>]>,
}

impl ChangeDispatcher {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fans `event` out to every listener sequentially: each handler
    /// completes before the next listener is invoked, so per-event ordering
    /// across listeners is deterministic.
    ///
    /// A tag/payload mismatch aborts before any listener observes the
    /// event. A failing handler is logged and skipped; one broken sync
    /// channel cannot block propagation to the others.
    pub async fn dispatch(
        &self,
        event: &ChangeEvent,
    ) -> Result<()> {
        let payload_group = event.payload.group();
        if event.group != payload_group {
            error!(
                group = %event.group,
                payload = %payload_group,
                "corrupt change event, aborting dispatch"
            );
            return Err(DispatchError::GroupMismatch {
                group: event.group,
                payload: payload_group,
            }
            .into());
        }

        debug!(
            group = %event.group,
            event_type = %event.event_type,
            entities = event.payload.len(),
            listeners = self.listeners.len(),
            "dispatching change event"
        );

        for listener in self.listeners.iter() {
            let outcome = match &event.payload {
                ChangePayload::AppAuth(data) => {
                    listener.on_app_auth_changed(data, event.event_type).await
                }
                ChangePayload::Plugin(data) => {
                    listener.on_plugin_changed(data, event.event_type).await
                }
                ChangePayload::Rule(data) => {
                    listener.on_rule_changed(data, event.event_type).await
                }
                ChangePayload::Selector(data) => {
                    listener.on_selector_changed(data, event.event_type).await
                }
                ChangePayload::MetaData(data) => {
                    listener.on_meta_data_changed(data, event.event_type).await
                }
            };

            if let Err(e) = outcome {
                warn!(
                    group = %event.group,
                    error = %e,
                    "listener failed, continuing fan-out"
                );
            }
        }

        Ok(())
    }
}
