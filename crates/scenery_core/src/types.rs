//! Value types shared by scene commands
//!
//! [`Vec3`] carries positions, extents, rotations, and scales; [`Color`]
//! and [`Finish`] carry the material arguments every shape takes.

use serde::{Serialize, Deserialize};

use crate::scalar::Scalar;

/// A triple of scalar components
///
/// Used for positions, box extents, per-axis rotations (degrees), and
/// per-axis scales. Convertible from tuples and arrays so call sites can
/// write `(0, -25, 0)` or `[1.5, 2.0, 3.0]` directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vec3 {
    /// All components zero (the default rotation)
    pub const ZERO: Self = Self {
        x: Scalar::Int(0),
        y: Scalar::Int(0),
        z: Scalar::Int(0),
    };

    /// All components one (the default scale)
    pub const ONE: Self = Self {
        x: Scalar::Int(1),
        y: Scalar::Int(1),
        z: Scalar::Int(1),
    };

    /// Create a triple from individual components
    pub fn new(x: impl Into<Scalar>, y: impl Into<Scalar>, z: impl Into<Scalar>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }
}

impl<X: Into<Scalar>, Y: Into<Scalar>, Z: Into<Scalar>> From<(X, Y, Z)> for Vec3 {
    fn from((x, y, z): (X, Y, Z)) -> Self {
        Vec3::new(x, y, z)
    }
}

impl<T: Into<Scalar> + Copy> From<[T; 3]> for Vec3 {
    fn from(v: [T; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

/// An RGB color with channels in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
}

impl Color {
    /// Create a color from red, green, and blue channels
    pub fn rgb(r: impl Into<Scalar>, g: impl Into<Scalar>, b: impl Into<Scalar>) -> Self {
        Self {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }

    /// White
    pub const WHITE: Self = Self {
        r: Scalar::Int(255),
        g: Scalar::Int(255),
        b: Scalar::Int(255),
    };

    /// Black
    pub const BLACK: Self = Self {
        r: Scalar::Int(0),
        g: Scalar::Int(0),
        b: Scalar::Int(0),
    };

    /// Mid gray
    pub const GRAY: Self = Self {
        r: Scalar::Int(127),
        g: Scalar::Int(127),
        b: Scalar::Int(127),
    };

    /// Red
    pub const RED: Self = Self {
        r: Scalar::Int(255),
        g: Scalar::Int(0),
        b: Scalar::Int(0),
    };

    /// Green
    pub const GREEN: Self = Self {
        r: Scalar::Int(0),
        g: Scalar::Int(255),
        b: Scalar::Int(0),
    };

    /// Blue
    pub const BLUE: Self = Self {
        r: Scalar::Int(0),
        g: Scalar::Int(0),
        b: Scalar::Int(255),
    };
}

/// Surface finish of a shape or mesh
///
/// Roughness 0.0 is a smooth mirror reflection, 1.0 fully diffuse.
/// Metalness 0.0 is a non-metal such as wood or stone, 1.0 a metal.
/// Both are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    pub roughness: Scalar,
    pub metalness: Scalar,
}

impl Finish {
    /// Create a finish from roughness and metalness
    pub fn new(roughness: impl Into<Scalar>, metalness: impl Into<Scalar>) -> Self {
        Self {
            roughness: roughness.into(),
            metalness: metalness.into(),
        }
    }

    /// Fully diffuse, non-metallic
    pub const MATTE: Self = Self {
        roughness: Scalar::Int(1),
        metalness: Scalar::Int(0),
    };

    /// Mirror-smooth metal
    pub const CHROME: Self = Self {
        roughness: Scalar::Int(0),
        metalness: Scalar::Int(1),
    };
}
