//! Data plane: the ordered, skippable, asynchronous plugin chain.

mod chain;
mod context;
mod plugin;

pub use chain::*;
pub use context::*;
pub use plugin::*;
