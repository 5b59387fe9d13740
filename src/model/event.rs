//! Change events flowing from the admin store to sync channels.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::entity::AppAuthData;
use super::entity::MetaData;
use super::entity::PluginData;
use super::entity::RuleData;
use super::entity::SelectorData;

/// Classification of a configuration entity kind. Fixed, closed set.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigGroup {
    AppAuth,
    Plugin,
    Rule,
    Selector,
    MetaData,
}

impl fmt::Display for ConfigGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigGroup::AppAuth => "APP_AUTH",
            ConfigGroup::Plugin => "PLUGIN",
            ConfigGroup::Rule => "RULE",
            ConfigGroup::Selector => "SELECTOR",
            ConfigGroup::MetaData => "META_DATA",
        };
        write!(f, "{}", name)
    }
}

/// The nature of a configuration change.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Add,
    Update,
    Delete,
    Refresh,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventType::Add => "ADD",
            EventType::Update => "UPDATE",
            EventType::Delete => "DELETE",
            EventType::Refresh => "REFRESH",
        };
        write!(f, "{}", name)
    }
}

/// Typed event payload: one variant per [`ConfigGroup`], so a payload is
/// homogeneous in its group by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangePayload {
    AppAuth(Vec<AppAuthData>),
    Plugin(Vec<PluginData>),
    Rule(Vec<RuleData>),
    Selector(Vec<SelectorData>),
    MetaData(Vec<MetaData>),
}

impl ChangePayload {
    /// The group tag matching this payload's entity kind.
    pub fn group(&self) -> ConfigGroup {
        match self {
            ChangePayload::AppAuth(_) => ConfigGroup::AppAuth,
            ChangePayload::Plugin(_) => ConfigGroup::Plugin,
            ChangePayload::Rule(_) => ConfigGroup::Rule,
            ChangePayload::Selector(_) => ConfigGroup::Selector,
            ChangePayload::MetaData(_) => ConfigGroup::MetaData,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChangePayload::AppAuth(d) => d.len(),
            ChangePayload::Plugin(d) => d.len(),
            ChangePayload::Rule(d) => d.len(),
            ChangePayload::Selector(d) => d.len(),
            ChangePayload::MetaData(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable notification describing a batch of same-kind configuration
/// entities plus a change type. Created transiently per sync operation and
/// discarded after dispatch.
///
/// [`ChangeEvent::new`] is the canonical constructor and derives the tag
/// from the payload; the dispatcher re-checks the pair and treats any
/// disagreement as data corruption.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    pub group: ConfigGroup,
    pub event_type: EventType,
    pub payload: ChangePayload,
}

impl ChangeEvent {
    pub fn new(
        event_type: EventType,
        payload: ChangePayload,
    ) -> Self {
        Self {
            group: payload.group(),
            event_type,
            payload,
        }
    }
}
