//! Argument validation
//!
//! The emitted script has no escaping and the renderer silently accepts
//! whatever numbers reach it, so bad arguments are rejected here, at the
//! call that supplies them, rather than discovered in a broken page.

use std::fmt;

use crate::command::SceneCommand;
use crate::scalar::Scalar;
use crate::types::{Color, Finish, Vec3};

/// Validation error for a single command argument
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric argument was NaN or infinite
    NotFinite { field: &'static str },
    /// A length, radius, or height was negative
    NegativeDimension { field: &'static str, value: f64 },
    /// A bounded argument fell outside its range
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A path or title contained a character the script format cannot carry
    UnsafeText { field: &'static str, found: char },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotFinite { field } => {
                write!(f, "{} is not a finite number", field)
            }
            ValidationError::NegativeDimension { field, value } => {
                write!(f, "{} is negative: {}", field, value)
            }
            ValidationError::OutOfRange { field, value, min, max } => {
                write!(f, "{} is {}, outside [{}, {}]", field, value, min, max)
            }
            ValidationError::UnsafeText { field, found } => {
                write!(f, "{} contains unsupported character {:?}", field, found)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn finite(field: &'static str, value: Scalar) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn finite3(field: &'static str, v: Vec3) -> Result<(), ValidationError> {
    finite(field, v.x)?;
    finite(field, v.y)?;
    finite(field, v.z)
}

fn non_negative(field: &'static str, value: Scalar) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value.as_f64() < 0.0 {
        return Err(ValidationError::NegativeDimension {
            field,
            value: value.as_f64(),
        });
    }
    Ok(())
}

fn non_negative3(field: &'static str, v: Vec3) -> Result<(), ValidationError> {
    non_negative(field, v.x)?;
    non_negative(field, v.y)?;
    non_negative(field, v.z)
}

fn bounded(field: &'static str, value: Scalar, min: f64, max: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    let v = value.as_f64();
    if v < min || v > max {
        return Err(ValidationError::OutOfRange { field, value: v, min, max });
    }
    Ok(())
}

fn color_ok(field: &'static str, c: &Color) -> Result<(), ValidationError> {
    bounded(field, c.r, 0.0, 255.0)?;
    bounded(field, c.g, 0.0, 255.0)?;
    bounded(field, c.b, 0.0, 255.0)
}

fn finish_ok(
    rough_field: &'static str,
    metal_field: &'static str,
    finish: &Finish,
) -> Result<(), ValidationError> {
    bounded(rough_field, finish.roughness, 0.0, 1.0)?;
    bounded(metal_field, finish.metalness, 0.0, 1.0)
}

/// Check that a string can be embedded verbatim between double quotes
///
/// The script format defines no escaping, so double quotes, backslashes,
/// and control characters (including newlines) are rejected.
pub fn validate_text(field: &'static str, text: &str) -> Result<(), ValidationError> {
    for found in text.chars() {
        if found == '"' || found == '\\' || found.is_control() {
            return Err(ValidationError::UnsafeText { field, found });
        }
    }
    Ok(())
}

impl SceneCommand {
    /// Check every argument of this command, reporting the first offender
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            SceneCommand::Box(b) => {
                finite3("box center", b.center)?;
                non_negative3("box extents", b.extents)?;
                color_ok("box color", &b.color)?;
                finish_ok("box roughness", "box metalness", &b.finish)?;
                finite3("box rotation", b.rotation)
            }
            SceneCommand::Cylinder(c) => {
                finite3("cylinder center", c.center)?;
                non_negative("cylinder radius", c.radius)?;
                non_negative("cylinder height", c.height)?;
                color_ok("cylinder color", &c.color)?;
                finish_ok("cylinder roughness", "cylinder metalness", &c.finish)?;
                finite3("cylinder rotation", c.rotation)?;
                finite3("cylinder scale", c.scale)
            }
            SceneCommand::Cone(c) => {
                finite3("cone center", c.center)?;
                non_negative("cone radius", c.radius)?;
                non_negative("cone height", c.height)?;
                color_ok("cone color", &c.color)?;
                finish_ok("cone roughness", "cone metalness", &c.finish)?;
                finite3("cone rotation", c.rotation)?;
                finite3("cone scale", c.scale)
            }
            SceneCommand::Ellipsoid(e) => {
                finite3("ellipsoid center", e.center)?;
                non_negative3("ellipsoid radii", e.radii)?;
                color_ok("ellipsoid color", &e.color)?;
                finish_ok("ellipsoid roughness", "ellipsoid metalness", &e.finish)?;
                finite3("ellipsoid rotation", e.rotation)
            }
            SceneCommand::Mesh(m) => {
                validate_text("mesh path", &m.path)?;
                finite3("mesh position", m.position)?;
                finite3("mesh rotation", m.rotation)?;
                finite3("mesh scale", m.scale)?;
                color_ok("mesh color", &m.color)?;
                finish_ok("mesh roughness", "mesh metalness", &m.finish)
            }
            SceneCommand::TexturedMesh(t) => {
                validate_text("textured mesh path", &t.mesh_path)?;
                validate_text("textured mesh material path", &t.material_path)?;
                finite3("textured mesh position", t.position)?;
                finite3("textured mesh rotation", t.rotation)?;
                finite3("textured mesh scale", t.scale)?;
                bounded("textured mesh shininess", t.shininess, 0.0, 255.0)
            }
            SceneCommand::Camera { position, rotation_y } => {
                finite3("camera position", *position)?;
                finite("camera rotation", *rotation_y)
            }
            SceneCommand::PointLight { position, color, intensity } => {
                finite3("point light position", *position)?;
                color_ok("point light color", color)?;
                bounded("point light intensity", *intensity, 0.0, 1.0)
            }
            SceneCommand::DirectionalLight { position, color, intensity } => {
                finite3("directional light position", *position)?;
                color_ok("directional light color", color)?;
                bounded("directional light intensity", *intensity, 0.0, 1.0)
            }
        }
    }
}
