//! Scene builder
//!
//! [`SceneBuilder`] is an append-only accumulator of scene commands. Each
//! add-operation validates its arguments, then appends exactly one command
//! to the log; nothing is ever reordered, edited, or removed. Serializing
//! the log reads it without clearing, so one builder can be saved any
//! number of times, each artifact reflecting the full history so far.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::command::{
    Cone, Cuboid, Cylinder, Ellipsoid, MeshRef, SceneCommand, TexturedMeshRef,
};
use crate::scalar::Scalar;
use crate::types::{Color, Finish, Vec3};
use crate::validate::ValidationError;

/// Append-only accumulator of scene commands
///
/// # Example
/// ```ignore
/// let mut scene = SceneBuilder::new();
/// scene.add_point_light((-100, 200, 0), Color::rgb(200, 200, 200), 1.0)?;
/// scene.add_camera((0, 2, 0), 0)?;
/// scene.add_box(Cuboid::new((0, -25, 0), (1000, 50, 1000), Color::rgb(100, 100, 100), Finish::MATTE))?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneBuilder {
    commands: Vec<SceneCommand>,
}

impl SceneBuilder {
    /// Create an empty scene
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    /// Create an empty scene with pre-allocated command capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// The command log, in call order
    pub fn commands(&self) -> &[SceneCommand] {
        &self.commands
    }

    /// Number of commands added so far
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if no commands have been added
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn push(&mut self, command: SceneCommand) -> Result<(), ValidationError> {
        command.validate()?;
        self.commands.push(command);
        Ok(())
    }

    /// Add a box
    pub fn add_box(&mut self, cuboid: Cuboid) -> Result<(), ValidationError> {
        self.push(SceneCommand::Box(cuboid))
    }

    /// Add a cylinder
    pub fn add_cylinder(&mut self, cylinder: Cylinder) -> Result<(), ValidationError> {
        self.push(SceneCommand::Cylinder(cylinder))
    }

    /// Add a cone
    pub fn add_cone(&mut self, cone: Cone) -> Result<(), ValidationError> {
        self.push(SceneCommand::Cone(cone))
    }

    /// Add an ellipsoid
    pub fn add_ellipsoid(&mut self, ellipsoid: Ellipsoid) -> Result<(), ValidationError> {
        self.push(SceneCommand::Ellipsoid(ellipsoid))
    }

    /// Add a sphere
    ///
    /// A sphere is an ellipsoid with all three semi-axis radii equal to
    /// `radius`; there is no separate sphere command, so renderer behavior
    /// for ellipsoids applies to spheres automatically.
    pub fn add_sphere(
        &mut self,
        center: impl Into<Vec3>,
        radius: impl Into<Scalar>,
        color: Color,
        finish: Finish,
    ) -> Result<(), ValidationError> {
        let radius = radius.into();
        self.add_ellipsoid(Ellipsoid::new(center, (radius, radius, radius), color, finish))
    }

    /// Add a mesh referenced by path
    pub fn add_mesh(&mut self, mesh: MeshRef) -> Result<(), ValidationError> {
        self.push(SceneCommand::Mesh(mesh))
    }

    /// Add a mesh paired with an external material file
    pub fn add_textured_mesh(&mut self, mesh: TexturedMeshRef) -> Result<(), ValidationError> {
        self.push(SceneCommand::TexturedMesh(mesh))
    }

    /// Add a camera at `position`, rotated `rotation_y` degrees about the y axis
    ///
    /// Multiple cameras may be added; the renderer decides which is active.
    pub fn add_camera(
        &mut self,
        position: impl Into<Vec3>,
        rotation_y: impl Into<Scalar>,
    ) -> Result<(), ValidationError> {
        self.push(SceneCommand::Camera {
            position: position.into(),
            rotation_y: rotation_y.into(),
        })
    }

    /// Add a point light with `intensity` in [0, 1]
    pub fn add_point_light(
        &mut self,
        position: impl Into<Vec3>,
        color: Color,
        intensity: impl Into<Scalar>,
    ) -> Result<(), ValidationError> {
        self.push(SceneCommand::PointLight {
            position: position.into(),
            color,
            intensity: intensity.into(),
        })
    }

    /// Add a directional light with parallel rays toward the origin
    pub fn add_directional_light(
        &mut self,
        position: impl Into<Vec3>,
        color: Color,
        intensity: impl Into<Scalar>,
    ) -> Result<(), ValidationError> {
        self.push(SceneCommand::DirectionalLight {
            position: position.into(),
            color,
            intensity: intensity.into(),
        })
    }

    /// Load a scene description from a RON file
    ///
    /// Every loaded command is validated, so a hand-edited file cannot
    /// smuggle arguments past the builder's checks.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(&path)?;
        let builder: SceneBuilder = ron::from_str(&contents)?;
        for command in &builder.commands {
            command.validate()?;
        }
        log::debug!(
            "loaded scene description ({} commands) from {}",
            builder.commands.len(),
            path.as_ref().display()
        );
        Ok(builder)
    }

    /// Save this scene description to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(&path, contents)?;
        log::debug!(
            "saved scene description ({} commands) to {}",
            self.commands.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Error loading a scene description
#[derive(Debug)]
pub enum LoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// A loaded command carried invalid arguments
    Invalid(ValidationError),
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for LoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        LoadError::Parse(e)
    }
}

impl From<ValidationError> for LoadError {
    fn from(e: ValidationError) -> Self {
        LoadError::Invalid(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Parse(e) => write!(f, "Parse error: {}", e),
            LoadError::Invalid(e) => write!(f, "Invalid command: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Error saving a scene description
#[derive(Debug)]
pub enum SaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<ron::Error> for SaveError {
    fn from(e: ron::Error) -> Self {
        SaveError::Serialize(e)
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}
