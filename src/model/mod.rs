//! Configuration entity model shared by both planes.

mod entity;
mod event;

pub use entity::*;
pub use event::*;
