//! Synchronization of persisted configuration into change events.

mod coordinator;
mod memory;
mod store;

pub use coordinator::*;
pub use memory::*;
pub use store::*;
