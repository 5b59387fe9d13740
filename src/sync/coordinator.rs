//! Translates persisted configuration into change events on demand.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::store::ConfigStore;
use crate::ChangeDispatcher;
use crate::ChangeEvent;
use crate::ChangePayload;
use crate::EventType;
use crate::Result;
use crate::SyncError;

#[cfg(test)]
use mockall::automock;

/// Opaque self-synchronizing contract for the auth and metadata kinds.
///
/// These kinds own their own distribution channel: implementations are
/// expected to emit an equivalent change event themselves. The coordinator
/// only triggers them and treats a failure like any other sync failure.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SelfSyncHandler: Send + Sync + 'static {
    async fn sync_app_auth(
        &self,
        event_type: EventType,
    ) -> Result<()>;

    async fn sync_meta_data(
        &self,
        event_type: EventType,
    ) -> Result<()>;
}

/// Reads the persistent store and emits change events for full or scoped
/// synchronization requests.
///
/// There is no cross-kind atomicity: events are emitted independently, so
/// a listener may observe a plugin update before the matching selector
/// refresh. Downstream consumers must tolerate transient inconsistency
/// between kinds. Any read failure aborts the remainder of the operation;
/// events already dispatched are not retracted.
pub struct SyncCoordinator {
    store: Arc<dyn ConfigStore>,
    dispatcher: Arc<ChangeDispatcher>,
    self_sync: Arc<dyn SelfSyncHandler>,
}

impl SyncCoordinator {
    pub fn new(
        store: Arc<dyn ConfigStore>,
        dispatcher: Arc<ChangeDispatcher>,
        self_sync: Arc<dyn SelfSyncHandler>,
    ) -> Self {
        Self {
            store,
            dispatcher,
            self_sync,
        }
    }

    /// Full synchronization of every entity kind: plugins, selectors and
    /// rules each emit exactly one event carrying their complete set; the
    /// auth and metadata kinds are delegated to [`SelfSyncHandler`].
    pub async fn sync_all(
        &self,
        event_type: EventType,
    ) -> Result<()> {
        self.self_sync.sync_app_auth(event_type).await?;

        let plugins = self.store.list_plugins().await?;
        self.dispatcher
            .dispatch(&ChangeEvent::new(event_type, ChangePayload::Plugin(plugins)))
            .await?;

        let selectors = self.store.list_selectors().await?;
        self.dispatcher
            .dispatch(&ChangeEvent::new(
                event_type,
                ChangePayload::Selector(selectors),
            ))
            .await?;

        let rules = self.store.list_rules().await?;
        self.dispatcher
            .dispatch(&ChangeEvent::new(event_type, ChangePayload::Rule(rules)))
            .await?;

        self.self_sync.sync_meta_data(event_type).await?;

        info!(event_type = %event_type, "full configuration sync completed");
        Ok(())
    }

    /// Scoped synchronization of one plugin: one Update event for the
    /// plugin itself, then (if the plugin has selectors) one Refresh event
    /// covering all of them, then one Refresh event per selector scoped to
    /// that selector's own rules.
    pub async fn sync_plugin(
        &self,
        plugin_id: &str,
    ) -> Result<()> {
        let plugin = self
            .store
            .find_plugin(plugin_id)
            .await?
            .ok_or_else(|| SyncError::PluginNotFound(plugin_id.to_string()))?;

        self.dispatcher
            .dispatch(&ChangeEvent::new(
                EventType::Update,
                ChangePayload::Plugin(vec![plugin]),
            ))
            .await?;

        let selectors = self.store.selectors_by_plugin(plugin_id).await?;
        if selectors.is_empty() {
            return Ok(());
        }

        self.dispatcher
            .dispatch(&ChangeEvent::new(
                EventType::Refresh,
                ChangePayload::Selector(selectors.clone()),
            ))
            .await?;

        // One rule event per selector, scoped to that selector's rules
        // (emitted even when the selector has none).
        for selector in &selectors {
            let rules = self.store.rules_by_selector(&selector.id).await?;
            self.dispatcher
                .dispatch(&ChangeEvent::new(
                    EventType::Refresh,
                    ChangePayload::Rule(rules),
                ))
                .await?;
        }

        info!(plugin_id, selectors = selectors.len(), "plugin sync completed");
        Ok(())
    }
}
