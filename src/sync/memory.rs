use async_trait::async_trait;
use dashmap::DashMap;

use super::store::ConfigStore;
use crate::PluginData;
use crate::RuleData;
use crate::SelectorData;
use crate::StoreError;

/// In-memory [`ConfigStore`] adapter keyed by entity id.
///
/// Serves as the store for embedded deployments and tests; production
/// deployments put a database-backed adapter behind the same trait.
#[derive(Default)]
pub struct MemoryConfigStore {
    plugins: DashMap<String, PluginData>,
    selectors: DashMap<String, SelectorData>,
    rules: DashMap<String, RuleData>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_plugin(
        &self,
        plugin: PluginData,
    ) {
        self.plugins.insert(plugin.id.clone(), plugin);
    }

    pub fn upsert_selector(
        &self,
        selector: SelectorData,
    ) {
        self.selectors.insert(selector.id.clone(), selector);
    }

    pub fn upsert_rule(
        &self,
        rule: RuleData,
    ) {
        self.rules.insert(rule.id.clone(), rule);
    }

    pub fn remove_plugin(
        &self,
        plugin_id: &str,
    ) -> Option<PluginData> {
        self.plugins.remove(plugin_id).map(|(_, v)| v)
    }
}

fn sorted_by<T, K: Ord>(
    mut items: Vec<T>,
    key: impl Fn(&T) -> K,
) -> Vec<T> {
    items.sort_by_key(key);
    items
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn list_plugins(&self) -> Result<Vec<PluginData>, StoreError> {
        let items: Vec<_> = self.plugins.iter().map(|e| e.value().clone()).collect();
        Ok(sorted_by(items, |p| p.id.clone()))
    }

    async fn list_selectors(&self) -> Result<Vec<SelectorData>, StoreError> {
        let items: Vec<_> = self.selectors.iter().map(|e| e.value().clone()).collect();
        Ok(sorted_by(items, |s| (s.sort, s.id.clone())))
    }

    async fn list_rules(&self) -> Result<Vec<RuleData>, StoreError> {
        let items: Vec<_> = self.rules.iter().map(|e| e.value().clone()).collect();
        Ok(sorted_by(items, |r| (r.sort, r.id.clone())))
    }

    async fn find_plugin(
        &self,
        plugin_id: &str,
    ) -> Result<Option<PluginData>, StoreError> {
        Ok(self.plugins.get(plugin_id).map(|e| e.value().clone()))
    }

    async fn selectors_by_plugin(
        &self,
        plugin_id: &str,
    ) -> Result<Vec<SelectorData>, StoreError> {
        let items: Vec<_> = self
            .selectors
            .iter()
            .filter(|e| e.value().plugin_id == plugin_id)
            .map(|e| e.value().clone())
            .collect();
        Ok(sorted_by(items, |s| (s.sort, s.id.clone())))
    }

    async fn rules_by_selector(
        &self,
        selector_id: &str,
    ) -> Result<Vec<RuleData>, StoreError> {
        let items: Vec<_> = self
            .rules
            .iter()
            .filter(|e| e.value().selector_id == selector_id)
            .map(|e| e.value().clone())
            .collect();
        Ok(sorted_by(items, |r| (r.sort, r.id.clone())))
    }
}
