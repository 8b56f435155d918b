//! Typed scene commands
//!
//! Every builder call appends one [`SceneCommand`] to the log. Commands
//! are plain data records; turning them into renderer script text is the
//! serializer's job, so alternate encodings never touch the builder API.

use serde::{Serialize, Deserialize};

use crate::scalar::Scalar;
use crate::types::{Color, Finish, Vec3};

/// A box, optionally rotated about its center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    /// Center of the box
    pub center: Vec3,
    /// Side lengths along x, y, z
    pub extents: Vec3,
    pub color: Color,
    pub finish: Finish,
    /// Rotation about each axis, degrees
    pub rotation: Vec3,
}

impl Cuboid {
    /// Create an unrotated box
    pub fn new(
        center: impl Into<Vec3>,
        extents: impl Into<Vec3>,
        color: Color,
        finish: Finish,
    ) -> Self {
        Self {
            center: center.into(),
            extents: extents.into(),
            color,
            finish,
            rotation: Vec3::ZERO,
        }
    }

    /// Set the rotation about each axis, in degrees
    pub fn with_rotation(mut self, rotation: impl Into<Vec3>) -> Self {
        self.rotation = rotation.into();
        self
    }
}

/// A cylinder standing on the y axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    pub center: Vec3,
    pub radius: Scalar,
    pub height: Scalar,
    pub color: Color,
    pub finish: Finish,
    /// Rotation about each axis, degrees
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Cylinder {
    /// Create an unrotated, unscaled cylinder
    pub fn new(
        center: impl Into<Vec3>,
        radius: impl Into<Scalar>,
        height: impl Into<Scalar>,
        color: Color,
        finish: Finish,
    ) -> Self {
        Self {
            center: center.into(),
            radius: radius.into(),
            height: height.into(),
            color,
            finish,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Set the rotation about each axis, in degrees
    pub fn with_rotation(mut self, rotation: impl Into<Vec3>) -> Self {
        self.rotation = rotation.into();
        self
    }

    /// Set the per-axis scale
    pub fn with_scale(mut self, scale: impl Into<Vec3>) -> Self {
        self.scale = scale.into();
        self
    }
}

/// A cone standing on the y axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    pub center: Vec3,
    pub radius: Scalar,
    pub height: Scalar,
    pub color: Color,
    pub finish: Finish,
    /// Rotation about each axis, degrees
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Cone {
    /// Create an unrotated, unscaled cone
    pub fn new(
        center: impl Into<Vec3>,
        radius: impl Into<Scalar>,
        height: impl Into<Scalar>,
        color: Color,
        finish: Finish,
    ) -> Self {
        Self {
            center: center.into(),
            radius: radius.into(),
            height: height.into(),
            color,
            finish,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Set the rotation about each axis, in degrees
    pub fn with_rotation(mut self, rotation: impl Into<Vec3>) -> Self {
        self.rotation = rotation.into();
        self
    }

    /// Set the per-axis scale
    pub fn with_scale(mut self, scale: impl Into<Vec3>) -> Self {
        self.scale = scale.into();
        self
    }
}

/// An ellipsoid with three semi-axis radii
///
/// Spheres are ellipsoids with all three radii equal; see
/// [`SceneBuilder::add_sphere`](crate::SceneBuilder::add_sphere).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    pub center: Vec3,
    /// Semi-axis radii along x, y, z
    pub radii: Vec3,
    pub color: Color,
    pub finish: Finish,
    /// Rotation about each axis, degrees
    pub rotation: Vec3,
}

impl Ellipsoid {
    /// Create an unrotated ellipsoid
    pub fn new(
        center: impl Into<Vec3>,
        radii: impl Into<Vec3>,
        color: Color,
        finish: Finish,
    ) -> Self {
        Self {
            center: center.into(),
            radii: radii.into(),
            color,
            finish,
            rotation: Vec3::ZERO,
        }
    }

    /// Set the rotation about each axis, in degrees
    pub fn with_rotation(mut self, rotation: impl Into<Vec3>) -> Self {
        self.rotation = rotation.into();
        self
    }
}

/// A mesh loaded by the renderer from an external file
///
/// The path is an opaque reference resolved by the renderer; it is never
/// checked against the filesystem here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshRef {
    /// Renderer-relative path to the mesh file
    pub path: String,
    /// Position offset
    pub position: Vec3,
    /// Rotation about each axis, degrees
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
    pub color: Color,
    pub finish: Finish,
}

impl MeshRef {
    /// Create an untransformed mesh reference
    pub fn new(
        path: impl Into<String>,
        position: impl Into<Vec3>,
        color: Color,
        finish: Finish,
    ) -> Self {
        Self {
            path: path.into(),
            position: position.into(),
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color,
            finish,
        }
    }

    /// Set the rotation about each axis, in degrees
    pub fn with_rotation(mut self, rotation: impl Into<Vec3>) -> Self {
        self.rotation = rotation.into();
        self
    }

    /// Set the per-axis scale
    pub fn with_scale(mut self, scale: impl Into<Vec3>) -> Self {
        self.scale = scale.into();
        self
    }
}

/// A mesh paired with an external material file
///
/// The material file replaces the color/finish arguments; shininess in
/// [0, 255] is the only material parameter carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TexturedMeshRef {
    /// Renderer-relative path to the mesh file
    pub mesh_path: String,
    /// Renderer-relative path to the material file
    pub material_path: String,
    /// Position offset
    pub position: Vec3,
    /// Rotation about each axis, degrees
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
    /// Shininess in [0, 255]
    pub shininess: Scalar,
}

impl TexturedMeshRef {
    /// Create an untransformed textured mesh reference
    pub fn new(
        mesh_path: impl Into<String>,
        material_path: impl Into<String>,
        position: impl Into<Vec3>,
        shininess: impl Into<Scalar>,
    ) -> Self {
        Self {
            mesh_path: mesh_path.into(),
            material_path: material_path.into(),
            position: position.into(),
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            shininess: shininess.into(),
        }
    }

    /// Set the rotation about each axis, in degrees
    pub fn with_rotation(mut self, rotation: impl Into<Vec3>) -> Self {
        self.rotation = rotation.into();
        self
    }

    /// Set the per-axis scale
    pub fn with_scale(mut self, scale: impl Into<Vec3>) -> Self {
        self.scale = scale.into();
        self
    }
}

/// One entry in a scene's command log
///
/// The log is the scene's entire authoring history: appended in call
/// order, never reordered or mutated. Each variant holds the arguments of
/// one renderer statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneCommand {
    Box(Cuboid),
    Cylinder(Cylinder),
    Cone(Cone),
    Ellipsoid(Ellipsoid),
    Mesh(MeshRef),
    TexturedMesh(TexturedMeshRef),
    /// A viewpoint; the renderer decides which camera is active
    Camera {
        position: Vec3,
        /// Rotation about the y axis, degrees
        rotation_y: Scalar,
    },
    /// A light emitting uniformly from a point
    PointLight {
        position: Vec3,
        color: Color,
        /// Intensity in [0, 1]
        intensity: Scalar,
    },
    /// A light with parallel rays directed toward the origin
    DirectionalLight {
        position: Vec3,
        color: Color,
        /// Intensity in [0, 1]
        intensity: Scalar,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_defaults_to_no_rotation() {
        let b = Cuboid::new((0, 0, 0), (1, 1, 1), Color::WHITE, Finish::MATTE);
        assert_eq!(b.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_cylinder_defaults() {
        let c = Cylinder::new((0, 1, 0), 0.05, 2, Color::GRAY, Finish::MATTE);
        assert_eq!(c.rotation, Vec3::ZERO);
        assert_eq!(c.scale, Vec3::ONE);
    }

    #[test]
    fn test_with_rotation_and_scale() {
        let c = Cone::new((0, 0, 0), 1, 2, Color::WHITE, Finish::MATTE)
            .with_rotation((0, 90, 0))
            .with_scale((2, 2, 2));
        assert_eq!(c.rotation, Vec3::new(0, 90, 0));
        assert_eq!(c.scale, Vec3::new(2, 2, 2));
    }

    #[test]
    fn test_command_serialization_roundtrip() {
        let cmd = SceneCommand::Box(
            Cuboid::new((0, -25, 0), (1000, 50, 1000), Color::rgb(100, 100, 100), Finish::MATTE)
                .with_rotation((0, 45, 0)),
        );
        let text = ron::to_string(&cmd).unwrap();
        let back: SceneCommand = ron::from_str(&text).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_mesh_roundtrip_keeps_paths() {
        let cmd = SceneCommand::TexturedMesh(TexturedMeshRef::new(
            "meshes/tower.obj",
            "meshes/tower.mtl",
            (0, 18, -20),
            0,
        ));
        let text = ron::to_string(&cmd).unwrap();
        let back: SceneCommand = ron::from_str(&text).unwrap();
        assert_eq!(back, cmd);
    }
}
