//! HTML serialization for scene descriptions
//!
//! Turns a [`SceneBuilder`](scenery_core::SceneBuilder) command log into a
//! self-contained HTML page the external renderer consumes: fixed include
//! prefix, one script statement per command in log order, title and
//! repaint statements, fixed suffix. Output is deterministic down to the
//! byte for a given log and title.
//!
//! - [`SceneDocument`] - A log paired with a title; renders and saves
//! - [`EmitError`] - Title rejection or destination write failure

mod encode;
mod template;
mod document;

pub use document::{EmitError, SceneDocument};
