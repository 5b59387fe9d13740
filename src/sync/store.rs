//! Read boundary over the persistent configuration store.

use async_trait::async_trait;

use crate::PluginData;
use crate::RuleData;
use crate::SelectorData;
use crate::StoreError;

#[cfg(test)]
use mockall::automock;

/// Read-only access to persisted gateway configuration. The core never
/// writes through this boundary; mutations happen on the admin side and
/// reach the core as sync requests.
///
/// Returned sequences are ordered (by sort weight, then id) so every sync
/// channel observes entities in the same order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConfigStore: Send + Sync + 'static {
    async fn list_plugins(&self) -> Result<Vec<PluginData>, StoreError>;

    async fn list_selectors(&self) -> Result<Vec<SelectorData>, StoreError>;

    async fn list_rules(&self) -> Result<Vec<RuleData>, StoreError>;

    async fn find_plugin(
        &self,
        plugin_id: &str,
    ) -> Result<Option<PluginData>, StoreError>;

    async fn selectors_by_plugin(
        &self,
        plugin_id: &str,
    ) -> Result<Vec<SelectorData>, StoreError>;

    async fn rules_by_selector(
        &self,
        selector_id: &str,
    ) -> Result<Vec<RuleData>, StoreError>;
}
