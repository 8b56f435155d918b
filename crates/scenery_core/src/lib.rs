//! Core types for the scenery page generator
//!
//! This crate provides the scene-description side of the system:
//!
//! - [`Scalar`] - A numeric argument preserving integer-vs-float spelling
//! - [`Vec3`], [`Color`], [`Finish`] - Value types shared by commands
//! - [`Cuboid`], [`Cylinder`], [`Cone`], [`Ellipsoid`] - Shape parameters
//! - [`MeshRef`], [`TexturedMeshRef`] - External mesh references
//! - [`SceneCommand`] - One entry in a scene's command log
//! - [`SceneBuilder`] - Append-only accumulator of commands
//! - [`ValidationError`] - Rejection produced by an add-operation
//!
//! Turning a command log into the renderer HTML page lives in
//! `scenery_emit`.

mod scalar;
mod types;
mod command;
mod builder;
mod validate;

pub use scalar::Scalar;
pub use types::{Vec3, Color, Finish};
pub use command::{
    Cone, Cuboid, Cylinder, Ellipsoid, MeshRef, SceneCommand, TexturedMeshRef,
};
pub use builder::{LoadError, SaveError, SceneBuilder};
pub use validate::{validate_text, ValidationError};
