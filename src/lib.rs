//! Scenery - static 3D scene pages for an external renderer
//!
//! Describe a scene through ordered builder calls, then serialize it as a
//! self-contained HTML page the renderer draws. This facade re-exports
//! the builder core and the HTML serializer, plus the configuration and
//! sample scene used by the `scenery` binary.

pub mod config;
pub mod scene;

pub use scenery_core::{
    Color, Cone, Cuboid, Cylinder, Ellipsoid, Finish, LoadError, MeshRef, SaveError, Scalar,
    SceneBuilder, SceneCommand, TexturedMeshRef, ValidationError, Vec3,
};
pub use scenery_emit::{EmitError, SceneDocument};
