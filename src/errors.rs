//! Gateway Runtime Error Hierarchy
//!
//! Defines error types for the gateway core, categorized by plane:
//! configuration, control-plane dispatch/sync, and data-plane chain
//! execution.

use config::ConfigError;
use tokio::task::JoinError;

use crate::ConfigGroup;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration loading failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration validation failures
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Control-plane fan-out failures
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Synchronization failures against the config store
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Data-plane chain execution failures
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Unrecoverable failures requiring operator attention
    #[error("Fatal error: {0}")]
    Fatal(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// An event whose tag disagrees with its payload signals data
    /// corruption upstream; dispatch aborts before any listener runs.
    #[error("event tagged {group} carries a {payload} payload")]
    GroupMismatch {
        group: ConfigGroup,
        payload: ConfigGroup,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Scoped sync requested for an id the store does not know
    #[error("plugin {0} not found in config store")]
    PluginNotFound(String),

    /// Store read failures abort the remainder of the sync operation
    #[error("store read failed: {0}")]
    Store(#[from] StoreError),

    /// Failure in the delegated self-synchronizing auth/metadata path
    #[error("{kind} self-sync failed: {reason}")]
    SelfSync { kind: ConfigGroup, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O failures reaching the persistent store
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Backend-specific read failures
    #[error("store backend error: {0}")]
    Backend(String),

    /// Entity failed integrity checks on read
    #[error("malformed entity {id}: {reason}")]
    Corrupted { id: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Plugin completed with a failure instead of its continuation
    #[error("plugin {plugin} failed: {message}")]
    PluginAborted { plugin: String, message: String },

    /// Chain task failed to run to completion on the worker pool
    #[error("chain task failed: {0}")]
    TaskFailed(#[from] JoinError),

    /// Originating request aborted before the chain completed
    #[error("request canceled before the chain completed")]
    Canceled,
}

// ============== Conversion Implementations ============== //
impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Sync(SyncError::Store(e))
    }
}

impl From<JoinError> for Error {
    fn from(e: JoinError) -> Self {
        Error::Chain(ChainError::TaskFailed(e))
    }
}
