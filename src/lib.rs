//! Runtime core of a dynamically reconfigurable API gateway.
//!
//! Two coupled subsystems define the observable behavior:
//! - the data plane: an ordered, skippable, asynchronous plugin chain
//!   executed per request ([`PluginChain`], [`GatewayHandler`]);
//! - the control plane: typed configuration change events fanned out to a
//!   frozen set of synchronization channels ([`ChangeDispatcher`],
//!   [`SyncCoordinator`]).
//!
//! The planes share no runtime state. Plugins refresh their own behavior
//! from configuration the control plane distributed; the chain engine is
//! agnostic to it.

mod chain;
mod config;
mod constants;
mod dispatch;
mod errors;
mod handler;
mod metrics;
mod model;
mod scheduler;
mod sync;

pub use chain::*;
pub use config::*;
pub use dispatch::*;
pub use errors::*;
pub use handler::*;
pub use metrics::*;
pub use model::*;
pub use scheduler::*;
pub use sync::*;
