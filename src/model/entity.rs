use serde::Deserialize;
use serde::Serialize;

/// Credential entry authorizing a calling application.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AppAuthData {
    pub app_key: String,
    pub app_secret: String,
    pub enabled: bool,
}

/// One unit of request processing as persisted by the admin plane.
///
/// `config` is an opaque JSON document interpreted by the concrete plugin
/// implementation, never by the gateway core.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct PluginData {
    pub id: String,
    pub name: String,
    pub config: String,
    pub role: i32,
    pub enabled: bool,
}

/// Traffic selector attached to a plugin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct SelectorData {
    pub id: String,
    pub plugin_id: String,
    pub plugin_name: String,
    pub name: String,
    pub match_mode: i32,
    pub sort: i32,
    pub enabled: bool,
    /// Whether evaluation continues past this selector
    pub continued: bool,
    /// Opaque JSON handle interpreted by the owning plugin
    pub handle: String,
}

/// Fine-grained rule under a selector.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct RuleData {
    pub id: String,
    pub selector_id: String,
    pub name: String,
    pub match_mode: i32,
    pub sort: i32,
    pub enabled: bool,
    pub logged: bool,
    pub handle: String,
}

/// RPC metadata registered by downstream service clients.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct MetaData {
    pub id: String,
    pub app_name: String,
    pub path: String,
    pub rpc_type: String,
    pub service_name: String,
    pub method_name: String,
    pub enabled: bool,
}
