//! Control-plane fan-out: change events forwarded to every registered
//! sync-channel listener.

mod dispatcher;
mod listener;

pub use dispatcher::*;
pub use listener::*;
