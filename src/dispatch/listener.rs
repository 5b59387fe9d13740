use async_trait::async_trait;

use crate::AppAuthData;
use crate::EventType;
use crate::MetaData;
use crate::PluginData;
use crate::Result;
use crate::RuleData;
use crate::SelectorData;

/// Capability interface for one synchronization channel: one handler per
/// configuration kind, selected by the event's group tag.
///
/// Implementations propagate configuration to remote gateway instances
/// (HTTP long-polling, websocket push, a coordination service, ...). The
/// wire protocol is each implementation's own concern.
///
/// A handler error is isolated by the dispatcher: it is logged and the
/// fan-out continues with the remaining listeners.
#[async_trait]
pub trait ConfigListener: Send + Sync + 'static {
    async fn on_app_auth_changed(
        &self,
        data: &[AppAuthData],
        event_type: EventType,
    ) -> Result<()>;

    async fn on_plugin_changed(
        &self,
        data: &[PluginData],
        event_type: EventType,
    ) -> Result<()>;

    async fn on_rule_changed(
        &self,
        data: &[RuleData],
        event_type: EventType,
    ) -> Result<()>;

    async fn on_selector_changed(
        &self,
        data: &[SelectorData],
        event_type: EventType,
    ) -> Result<()>;

    async fn on_meta_data_changed(
        &self,
        data: &[MetaData],
        event_type: EventType,
    ) -> Result<()>;
}
